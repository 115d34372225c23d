//! The constellation of sealed letters.
//!
//! Stars light up as their letters are opened; a connecting line appears
//! once both of its endpoints are lit.

use dioxus::prelude::*;
use keepsake_core::content::letters::{CONSTELLATION_LINES, LETTER_COUNT, STAR_POSITIONS};
use keepsake_core::content::photos::PHOTOS;

#[component]
pub fn ConstellationMap(
    opened: Vec<bool>,
    unlocked_photos: usize,
    on_open: EventHandler<(usize, f64, f64)>,
    on_gallery: EventHandler<()>,
    on_vows: EventHandler<()>,
) -> Element {
    let opened_count = opened.iter().filter(|&&o| o).count();
    let all_opened = opened_count == LETTER_COUNT;
    let total_photos = PHOTOS.len();

    rsx! {
        div {
            class: if all_opened { "constellation-map complete" } else { "constellation-map" },
            h1 { class: "page-title", "Written in the stars" }
            p { class: "map-progress", "{opened_count} of {LETTER_COUNT} letters opened" }

            svg { view_box: "0 0 100 100", preserve_aspect_ratio: "xMidYMid meet",
                for (i, &(a, b)) in CONSTELLATION_LINES.iter().enumerate() {
                    {
                        let (x1, y1) = STAR_POSITIONS[a];
                        let (x2, y2) = STAR_POSITIONS[b];
                        let lit = opened.get(a).copied().unwrap_or(false)
                            && opened.get(b).copied().unwrap_or(false);
                        rsx! {
                            line {
                                key: "{i}",
                                class: if lit { "map-line lit" } else { "map-line" },
                                x1: "{x1}",
                                y1: "{y1}",
                                x2: "{x2}",
                                y2: "{y2}",
                            }
                        }
                    }
                }
                for (i, &(x, y)) in STAR_POSITIONS.iter().enumerate() {
                    {
                        let lit = opened.get(i).copied().unwrap_or(false);
                        let label = i + 1;
                        let label_y = y + 1.2;
                        rsx! {
                            g {
                                key: "{i}",
                                class: if lit { "letter-star lit" } else { "letter-star" },
                                onclick: move |evt: MouseEvent| {
                                    let point = evt.client_coordinates();
                                    on_open.call((i, point.x, point.y));
                                },
                                circle { cx: "{x}", cy: "{y}", r: "4" }
                                text { x: "{x}", y: "{label_y}", text_anchor: "middle", "{label}" }
                            }
                        }
                    }
                }
            }

            div { class: "map-actions",
                button {
                    class: "map-action",
                    onclick: move |_| on_gallery.call(()),
                    "gallery {unlocked_photos}/{total_photos}"
                }
                button {
                    class: "map-action",
                    disabled: !all_opened,
                    onclick: move |_| on_vows.call(()),
                    "the vows"
                }
            }
        }
    }
}
