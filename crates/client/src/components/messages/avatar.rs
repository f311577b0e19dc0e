//! Default avatar: the user's image, or a gradient circle with their initial.

use dioxus::prelude::*;
use threadline_shared::User;

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    #[props(!optional)]
    pub image: Option<String>,
    pub name: String,
    #[props(!optional)]
    pub user: Option<User>,
    #[props(default)]
    pub class: String,
}

/// Uppercased first character of `name`, used when there is no image.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

pub fn Avatar(props: AvatarProps) -> Element {
    let title = props
        .user
        .as_ref()
        .map(|u| format!("{} ({})", props.name, u.id))
        .unwrap_or_else(|| props.name.clone());
    let letter = initial(&props.name);

    rsx! {
        div { class: "avatar flex-shrink-0 {props.class}", title: "{title}",
            if let Some(image) = props.image.as_ref().filter(|i| !i.is_empty()) {
                img {
                    class: "w-full h-full rounded-full object-cover",
                    src: "{image}",
                    alt: "{props.name}",
                }
            } else {
                div { class: "w-full h-full rounded-full flex items-center justify-center text-white font-semibold bg-gradient-to-br from-indigo-500 to-purple-600",
                    "{letter}"
                }
            }
        }
    }
}
