fn main() {
    movie_catalog_api::main();
}
