// Server-side renders the components to HTML strings and checks the markup.

use hiphop_dancer::card::{
    BackFace, CardView, CardViewProps, CardViewState, EventCard, EventCardProps, FaceProps, FrontFace,
};
use hiphop_dancer::config::{PageConfig, Skin};
use hiphop_dancer::event::{Category, Event, EVENTS};
use hiphop_dancer::{App, AppProps};
use yew::{Callback, ServerRenderer};

fn battle_night() -> Event {
    EVENTS[0].clone()
}

fn open_jam() -> Event {
    Event {
        id: 7,
        title: "Open Jam",
        date: "1 June 2025",
        time: "18:00",
        location: "Park Stage",
        category: Category::Camp,
        description: "Bring your crew and your best moves.",
        price: None,
        capacity: None,
    }
}

async fn render_front(event: Event, skin: Skin) -> String {
    ServerRenderer::<FrontFace>::with_props(move || FaceProps { event, skin })
        .hydratable(false)
        .render()
        .await
}

async fn render_back(event: Event, skin: Skin) -> String {
    ServerRenderer::<BackFace>::with_props(move || FaceProps { event, skin })
        .hydratable(false)
        .render()
        .await
}

#[tokio::test]
async fn front_face_shows_title_and_category_badge() {
    let html = render_front(battle_night(), Skin::Classic).await;

    assert!(html.contains("Hip-Hop Battle Night"));
    assert!(html.contains("Concert"));
    assert!(html.contains("icon-music"));
    assert!(html.contains("Date: 25 July 2025"));
    assert!(html.contains("Venue: PRAVDA Club"));
    assert!(!html.contains("Price:"));
    assert!(!html.contains("Copy details"));
}

#[tokio::test]
async fn back_face_shows_description_and_price() {
    let html = render_back(battle_night(), Skin::Classic).await;

    assert!(html.contains("Heated battles, serious prizes"));
    assert!(html.contains("Price: 1500₽"));
    assert!(html.contains("Seats: 200"));
    assert!(html.contains("Copy details"));
    assert!(html.contains("icon-arrow-left"));
}

#[tokio::test]
async fn back_face_omits_missing_price_and_capacity() {
    let html = render_back(open_jam(), Skin::Classic).await;

    assert!(html.contains("Bring your crew and your best moves."));
    assert!(!html.contains("Price:"));
    assert!(!html.contains("Seats:"));
    assert!(html.contains("icon-mountain"));
    assert!(html.contains("Camp"));
}

#[tokio::test]
async fn card_mounts_on_front_face() {
    let html = ServerRenderer::<EventCard>::with_props(|| EventCardProps {
        event: EVENTS[1].clone(),
        skin: Skin::Classic,
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains(r#"data-face="front""#));
    assert!(html.contains(r#"aria-pressed="false""#));
    assert!(!html.contains("is-flipped"));
    assert!(html.contains("accent-performance"));
    assert!(html.contains("icon-users"));
}

#[tokio::test]
async fn page_renders_three_independent_cards() {
    let html = ServerRenderer::<App>::new().hydratable(false).render().await;

    assert_eq!(html.matches(r#"data-face="front""#).count(), 3);
    assert_eq!(html.matches(r#"data-face="back""#).count(), 0);
    for event in EVENTS {
        assert!(html.contains(event.title), "missing card for {}", event.title);
    }
    assert!(html.contains("HIP-HOP DANCER"));
    assert!(html.contains("Upcoming events"));
    assert!(html.contains("Ready to join?"));
    assert!(html.contains("skin-classic"));
}

#[tokio::test]
async fn poster_skin_puts_artwork_on_front_and_schedule_on_back() {
    let front = render_front(battle_night(), Skin::Poster).await;
    assert!(front.contains("img/concert.jpg"));
    // glyph and label stay visible when the artwork is missing
    assert!(front.contains("icon-music"));
    assert!(front.contains("poster__label"));
    assert!(!front.contains("Tap for details"));
    assert!(!front.contains("Date:"));

    let back = render_back(battle_night(), Skin::Poster).await;
    assert!(back.contains("Date: 25 July 2025"));
    assert!(back.contains("Time: 20:00"));
    assert!(back.contains("Price: 1500₽"));

    let page = ServerRenderer::<App>::with_props(|| AppProps {
        config: PageConfig { skin: Skin::Poster },
    })
    .hydratable(false)
    .render()
    .await;
    assert!(page.contains("skin-poster"));
    assert_eq!(page.matches("class=\"poster\"").count(), 3);
}

async fn render_card_view(event: Event, view: CardViewState) -> String {
    ServerRenderer::<CardView>::with_props(move || CardViewProps {
        event,
        skin: Skin::Classic,
        view,
        ontoggle: Callback::noop(),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn one_click_reveals_back_face_with_price() {
    let clicked = CardViewState::default().toggled();
    let html = render_card_view(battle_night(), clicked).await;

    assert!(html.contains(r#"data-face="back""#));
    assert!(html.contains("is-flipped"));
    assert!(html.contains(r#"aria-pressed="true""#));
    assert!(html.contains("Heated battles, serious prizes"));
    assert!(html.contains("Price: 1500₽"));
    assert!(html.contains("Hip-Hop Battle Night: back to summary"));
}

#[tokio::test]
async fn second_click_returns_to_front_face() {
    let twice = CardViewState::default().toggled().toggled();
    let html = render_card_view(battle_night(), twice).await;

    assert!(html.contains(r#"data-face="front""#));
    assert!(!html.contains("is-flipped"));
    assert!(html.contains(r#"aria-pressed="false""#));
}

#[tokio::test]
async fn flipping_one_card_leaves_siblings_on_front() {
    let mut faces = Vec::new();
    for (i, event) in EVENTS.iter().enumerate() {
        let view = if i == 0 { CardViewState::default().toggled() } else { CardViewState::default() };
        let html = render_card_view(event.clone(), view).await;
        faces.push(html.contains(r#"data-face="back""#));
    }
    assert_eq!(faces, vec![true, false, false]);
}
