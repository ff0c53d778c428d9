// src/card.rs — the flip card
use std::fmt;
use std::rc::Rc;

use gloo::console::{log, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

use crate::config::Skin;
use crate::event::{DetailLine, Event};
use crate::ui::{Badge, Icon, IconName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-card "revealed" flag. Lives only as long as the card is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardViewState {
    revealed: bool,
}

impl CardViewState {
    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self { revealed: !self.revealed }
    }

    pub fn face(self) -> Face {
        if self.revealed {
            Face::Back
        } else {
            Face::Front
        }
    }
}

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let win = web_sys::window().ok_or("No window available")?;
    let cb = win.navigator().clipboard();
    JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| "Clipboard write rejected".to_string())?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Toggle,
}

impl Reducible for CardViewState {
    type Action = CardAction;

    fn reduce(self: Rc<Self>, action: CardAction) -> Rc<Self> {
        match action {
            CardAction::Toggle => Rc::new(self.toggled()),
        }
    }
}

/// Keys that flip a focused card.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
    #[prop_or_default]
    pub skin: Skin,
}

/// Owns the revealed flag of one card.
#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let view = use_reducer(CardViewState::default);

    let ontoggle = {
        let view = view.clone();
        let id = props.event.id;
        Callback::from(move |()| {
            log!(format!("event {id}: showing {} face", view.toggled().face()));
            view.dispatch(CardAction::Toggle);
        })
    };

    html! {
        <CardView event={props.event.clone()} skin={props.skin} view={*view} ontoggle={ontoggle} />
    }
}

#[derive(Properties, PartialEq)]
pub struct CardViewProps {
    pub event: Event,
    #[prop_or_default]
    pub skin: Skin,
    #[prop_or_default]
    pub view: CardViewState,
    pub ontoggle: Callback<()>,
}

#[function_component(CardView)]
pub fn card_view(props: &CardViewProps) -> Html {
    let event = &props.event;
    let view = props.view;
    let face = view.face();

    let on_click = props.ontoggle.reform(|_: MouseEvent| ());
    let on_key = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_toggle_key(&e.key()) {
                e.prevent_default();
                ontoggle.emit(());
            }
        })
    };

    let label = if view.is_revealed() {
        format!("{}: back to summary", event.title)
    } else {
        format!("{}: show details", event.title)
    };

    html! {
        <div class={classes!("event-card", event.category.accent_class())} data-face={face.as_str()}>
            <div
                class={classes!("event-card__inner", view.is_revealed().then_some("is-flipped"))}
                role="button"
                tabindex="0"
                aria-pressed={view.is_revealed().to_string()}
                aria-label={label}
                onclick={on_click}
                onkeydown={on_key}
            >
                <div class="event-card__face event-card__face--front" aria-hidden={(face != Face::Front).to_string()}>
                    <FrontFace event={event.clone()} skin={props.skin} />
                </div>
                <div class="event-card__face event-card__face--back" aria-hidden={(face != Face::Back).to_string()}>
                    <BackFace event={event.clone()} skin={props.skin} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaceProps {
    pub event: Event,
    #[prop_or_default]
    pub skin: Skin,
}

#[function_component(FrontFace)]
pub fn front_face(props: &FaceProps) -> Html {
    let event = &props.event;
    match props.skin {
        Skin::Poster => html! {
            <div
                class="poster"
                style={format!("background-image:url('{}');", event.category.image())}
                role="img"
                aria-label={format!("{} poster: {}", event.category.label(), event.title)}
            >
                <Icon name={event.category.icon()} size={64} class={classes!("poster__glyph")} />
                <span class="poster__label">{ event.category.label() }</span>
            </div>
        },
        Skin::Classic => html! {
            <div class="face-body">
                <div class="face-top">
                    <Badge icon={event.category.icon()} label={event.category.label()} />
                    <span class="hint">{ "Tap for details" }</span>
                </div>
                <h3 class="card-title">{ event.title }</h3>
                <DetailList lines={event.schedule_lines().to_vec()} />
            </div>
        },
    }
}

/// Description, booking lines and actions. The poster skin has no front text,
/// so its back face carries the schedule as well.
#[function_component(BackFace)]
pub fn back_face(props: &FaceProps) -> Html {
    let event = &props.event;

    let mut lines = Vec::new();
    if props.skin == Skin::Poster {
        lines.extend(event.schedule_lines());
    }
    lines.extend(event.booking_lines());

    html! {
        <div class="face-body">
            <div class="face-top">
                <Badge
                    icon={event.category.icon()}
                    label={event.category.label()}
                    class={classes!("badge--accent")}
                />
                <Icon name={IconName::ArrowLeft} size={20} class={classes!("hint")} />
            </div>
            <h3 class="card-title card-title--accent">{ event.title }</h3>
            <p class="description">{ event.description }</p>
            if !lines.is_empty() {
                <DetailList lines={lines} />
            }
            <CardActions event={event.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailListProps {
    pub lines: Vec<DetailLine>,
}

#[function_component(DetailList)]
pub fn detail_list(props: &DetailListProps) -> Html {
    html! {
        <ul class="details">
            { for props.lines.iter().map(|line| html! {
                <li class={classes!("detail", line.accent.then_some("detail--accent"))}>
                    <Icon name={line.icon} size={18} class={classes!("detail__icon")} />
                    <span class="detail__text">{ line.text() }</span>
                </li>
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct CardActionsProps {
    event: Event,
}

#[function_component(CardActions)]
fn card_actions(props: &CardActionsProps) -> Html {
    let copy_status = use_state(|| None::<String>);

    let on_copy = {
        let copy_status = copy_status.clone();
        let text = props.event.summary_text();
        let id = props.event.id;
        Callback::from(move |e: MouseEvent| {
            // the card underneath must not flip
            e.stop_propagation();
            copy_status.set(Some("Copying…".into()));
            let copy_status = copy_status.clone();
            let text = text.clone();
            spawn_local(async move {
                match copy_to_clipboard(text).await {
                    Ok(()) => {
                        log!(format!("event {id}: details copied"));
                        copy_status.set(Some("Copied ✅".into()));
                    }
                    Err(err) => {
                        warn!(format!("event {id}: {err}"));
                        copy_status.set(Some(format!("Copy failed: {err}")));
                    }
                }
            });
        })
    };
    let stop_keys = Callback::from(|e: KeyboardEvent| e.stop_propagation());

    html! {
        <div class="card-actions">
            <button type="button" class="btn btn--ghost" onclick={on_copy} onkeydown={stop_keys}>
                <Icon name={IconName::Copy} size={16} />
                { "Copy details" }
            </button>
            if let Some(status) = (*copy_status).clone() {
                <span class="small">{ status }</span>
            }
        </div>
    }
}
