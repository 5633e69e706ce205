fn main() {
    multimodal_map::run();
}
