fn main() {
    storefront_web::launch();
}
