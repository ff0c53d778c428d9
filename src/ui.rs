use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Music,
    Users,
    Mountain,
    Calendar,
    Clock,
    MapPin,
    CreditCard,
    ArrowLeft,
    Bell,
    Instagram,
    Copy,
}

impl IconName {
    pub const ALL: [IconName; 11] = [
        IconName::Music,
        IconName::Users,
        IconName::Mountain,
        IconName::Calendar,
        IconName::Clock,
        IconName::MapPin,
        IconName::CreditCard,
        IconName::ArrowLeft,
        IconName::Bell,
        IconName::Instagram,
        IconName::Copy,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            IconName::Music => "music",
            IconName::Users => "users",
            IconName::Mountain => "mountain",
            IconName::Calendar => "calendar",
            IconName::Clock => "clock",
            IconName::MapPin => "map-pin",
            IconName::CreditCard => "credit-card",
            IconName::ArrowLeft => "arrow-left",
            IconName::Bell => "bell",
            IconName::Instagram => "instagram",
            IconName::Copy => "copy",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Music => "♫",
            IconName::Users => "👥",
            IconName::Mountain => "⛰",
            IconName::Calendar => "📅",
            IconName::Clock => "🕒",
            IconName::MapPin => "📍",
            IconName::CreditCard => "💳",
            IconName::ArrowLeft => "←",
            IconName::Bell => "🔔",
            IconName::Instagram => "📷",
            IconName::Copy => "⧉",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let class = classes!("icon", format!("icon-{}", props.name.slug()), props.class.clone());
    html! {
        <span class={class} style={format!("font-size:{}px;", props.size)} aria-hidden="true">
            { props.name.glyph() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub icon: IconName,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill with a small icon in front of a label.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.class.clone())}>
            <Icon name={props.icon} size={16} class={classes!("badge__icon")} />
            { props.label.clone() }
        </span>
    }
}
