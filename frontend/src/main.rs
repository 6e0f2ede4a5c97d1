//! Entry point for the WASM application

pub fn main() {
    fuzzy_frontend::start();
}
