use gloo::console::{log, warn};
use yew::prelude::*;

use crate::card::EventCard;
use crate::config::{PageConfig, Skin, INSTAGRAM_URL, NOTIFY_MESSAGE};
use crate::event::{Event, EVENTS};
use crate::ui::{Icon, IconName};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero__glow" aria-hidden="true"></div>
            <div class="hero__content">
                <div class="hero__medallion">
                    <Icon name={IconName::Music} size={48} />
                </div>
                <h1 class="hero__title">{ "HIP-HOP DANCER" }</h1>
                <p class="hero__sub">
                    { "Dive into the world of street dance. Concerts, shows and master classes from a professional dancer." }
                </p>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct EventGridProps {
    pub events: &'static [Event],
    #[prop_or_default]
    pub skin: Skin,
}

/// One independent flip card per event, keyed by id.
#[function_component(EventGrid)]
pub fn event_grid(props: &EventGridProps) -> Html {
    html! {
        <section id="events" class="events">
            <div class="events__head">
                <h2>{ "Upcoming events" }</h2>
                <p>{ "Concert and show calendar" }</p>
            </div>
            <div class="grid">
                { for props.events.iter().map(|event| html! {
                    <EventCard key={event.id} event={event.clone()} skin={props.skin} />
                }) }
            </div>
        </section>
    }
}

fn notify_alert() -> Result<(), String> {
    let win = web_sys::window().ok_or("No window available")?;
    win.alert_with_message(NOTIFY_MESSAGE)
        .map_err(|e| format!("{e:?}"))
}

fn alert_warning(result: Result<(), String>) -> Option<String> {
    result.err().map(|e| format!("notify alert failed: {e}"))
}

#[function_component(CtaFooter)]
pub fn cta_footer() -> Html {
    let on_notify = Callback::from(|_: MouseEvent| {
        log!("notify requested");
        if let Some(msg) = alert_warning(notify_alert()) {
            warn!(msg);
        }
    });

    html! {
        <footer class="cta">
            <h3>{ "Ready to join?" }</h3>
            <p>{ "Subscribe for updates and never miss the hottest events." }</p>
            <div class="cta__actions">
                <button type="button" class="btn btn--primary" onclick={on_notify}>
                    <Icon name={IconName::Bell} />
                    { "Get notified" }
                </button>
                <a class="btn btn--outline" href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                    <Icon name={IconName::Instagram} />
                    { "Follow on Instagram" }
                </a>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: PageConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let skin = props.config.skin;

    {
        use_effect_with(skin, move |skin| {
            log!(format!("rendered {} event cards ({} skin)", EVENTS.len(), skin));
            || ()
        });
    }

    html! {
        <div class={classes!("page", skin.page_class())}>
            <Hero />
            <main class="wrap">
                <EventGrid events={EVENTS} skin={skin} />
            </main>
            <CtaFooter />
        </div>
    }
}
