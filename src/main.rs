use hiphop_dancer::config::PageConfig;
use hiphop_dancer::{App, AppProps};

fn main() {
    let config = PageConfig::from_location();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
