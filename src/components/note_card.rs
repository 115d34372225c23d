//! One timeline card: a dated note, blurred until its morning comes.

use dioxus::prelude::*;
use keepsake_core::timeline::{format_long_date, locked_caption};
use keepsake_core::{DayNote, MediaKind};

#[component]
pub fn NoteCard(
    index: usize,
    note: DayNote,
    locked: bool,
    is_today: bool,
    on_tap: EventHandler<(usize, f64, f64)>,
) -> Element {
    let mut class = String::from("note-card");
    if locked {
        class.push_str(" locked");
    }
    if is_today {
        class.push_str(" today");
    }
    if note.is_milestone() && !locked {
        class.push_str(" milestone");
    }

    let date_line = format_long_date(note.date);
    let heading = note.title.map(|title| match note.emoji {
        Some(emoji) => format!("{emoji} {title}"),
        None => title.to_string(),
    });
    let caption = locked_caption(note.date);

    rsx! {
        article {
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                on_tap.call((index, point.x, point.y));
            },

            div { class: "note-card-date", "{date_line}" }
            if let Some(heading) = heading {
                h2 { class: "note-card-title", "{heading}" }
            }
            div { class: "note-card-body",
                for (i, paragraph) in note.content.split("\n\n").enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
                if let Some(media) = note.media {
                    match media.kind {
                        MediaKind::Image => rsx! {
                            img { src: "{media.src}", alt: media.alt.unwrap_or("") }
                        },
                        MediaKind::Audio => rsx! {
                            audio { src: "{media.src}", controls: true }
                        },
                        MediaKind::Youtube | MediaKind::Spotify => rsx! {
                            a { href: "{media.src}", "{media.src}" }
                        },
                    }
                }
            }
            if locked {
                p { class: "note-card-lock-caption", "🔒 {caption}" }
            }
        }
    }
}
