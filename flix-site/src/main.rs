mod app;
mod components;
mod context;
mod hooks;
mod pages;
mod transport;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
