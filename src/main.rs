use inboxbully::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("mounting InboxBully frontend");
    yew::Renderer::<App>::new().render();
}
