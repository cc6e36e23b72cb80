mod api;
mod app;
mod components;
mod config;
mod storage;

use app::{App, Props};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    match config::api_endpoints() {
        Ok(endpoints) => {
            yew::Renderer::<App>::with_props(Props { endpoints }).render();
        }
        Err(error) => {
            log::error!("Fail to resolve api endpoint, error={error}");
        }
    }
}
