//! DOM for one project card and the per-frame style writes.

use crate::constants::{CARD_CLASS, HIGHLIGHT_CLASS, LAYER_CLASS_PREFIX, PLACEHOLDER_CLASS};
use crate::dom::{append_html, append_text, create_html, set_style};
use crate::style;
use folio_core::{CardFrame, ImageSource, LayerId, Project, LAYERS};
use web_sys as web;

const VENT_COUNT: usize = 5;
const BINARY_STREAM: [&str; 4] = ["10110010", "01001101", "11100010", "00111001"];

pub struct CardView {
    pub root: web::HtmlElement,
    layers: Vec<web::HtmlElement>,
    highlight: web::HtmlElement,
}

impl CardView {
    /// Builds the card under `parent`. Layers are created in table order so
    /// `layers[id as usize]` is the element for `id`.
    pub fn build(
        document: &web::Document,
        parent: &web::Element,
        project: &Project,
    ) -> anyhow::Result<Self> {
        let root = append_html(document, parent, "div", CARD_CLASS)?;
        set_style(&root, "transform-style", "preserve-3d");

        let mut layers = Vec::with_capacity(LAYERS.len());
        for spec in LAYERS.iter() {
            let class = format!("card-layer {}{}", LAYER_CLASS_PREFIX, spec.id.name());
            let el = create_html(document, "div", &class)?;
            set_style(&el, "transform-style", "preserve-3d");
            layers.push(el);
        }

        let mut highlight = None;
        for spec in LAYERS.iter() {
            let el = &layers[spec.id as usize];
            match spec.id {
                // Nested inside the core's content panel
                LayerId::Title | LayerId::Description => {}
                LayerId::Core => {
                    root.append_child(el).map_err(crate::dom::js_err)?;
                    let content = fill_core(document, el, project)?;
                    content
                        .append_child(&layers[LayerId::Title as usize])
                        .map_err(crate::dom::js_err)?;
                    content
                        .append_child(&layers[LayerId::Description as usize])
                        .map_err(crate::dom::js_err)?;
                    let hl = append_html(document, el, "div", HIGHLIGHT_CLASS)?;
                    set_style(&hl, "mix-blend-mode", "overlay");
                    set_style(&hl, "pointer-events", "none");
                    set_style(&hl, "opacity", "0");
                    set_style(&hl, "transform", &style::highlight_lift_transform());
                    highlight = Some(hl);
                }
                _ => {
                    root.append_child(el).map_err(crate::dom::js_err)?;
                    fill_layer(document, spec.id, el, project)?;
                }
            }
        }
        layers[LayerId::Title as usize].set_text_content(Some(project.title));
        layers[LayerId::Description as usize].set_text_content(Some(project.description));

        let highlight = highlight.ok_or_else(|| anyhow::anyhow!("core layer missing"))?;
        Ok(Self {
            root,
            layers,
            highlight,
        })
    }

    /// Writes one frame into the element styles. `buf` is scratch space.
    pub fn apply(&self, frame: &CardFrame, buf: &mut String) {
        style::write_container_transform(buf, frame);
        set_style(&self.root, "transform", buf);
        let _ = self
            .root
            .class_list()
            .toggle_with_force("is-hovered", frame.hovered);

        for pose in frame.layers.iter() {
            if let Some(el) = self.layers.get(pose.id as usize) {
                style::write_layer_transform(buf, pose);
                set_style(el, "transform", buf);
            }
        }

        style::write_highlight_background(buf, &frame.highlight);
        set_style(&self.highlight, "background", buf);
        style::write_opacity(buf, frame.highlight.intensity);
        set_style(&self.highlight, "opacity", buf);
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}

fn fill_layer(
    document: &web::Document,
    id: LayerId,
    el: &web::HtmlElement,
    project: &Project,
) -> anyhow::Result<()> {
    match id {
        LayerId::GroundShadow => {
            set_style(el, "pointer-events", "none");
        }
        LayerId::Base => {
            append_html(document, el, "div", "circuit-texture")?;
            append_text(document, el, "div", "layer-label", "SYS_KERNEL_PANIC_PROTECTION")?;
        }
        LayerId::Vents => {
            for side in ["vents vents--left", "vents vents--right"] {
                let column = append_html(document, el, "div", side)?;
                for _ in 0..VENT_COUNT {
                    append_html(document, &column, "div", "vent")?;
                }
            }
        }
        LayerId::Grid => {
            append_html(document, el, "div", "schematic-ring")?;
        }
        LayerId::LeftPlate => {
            append_text(document, el, "span", "layer-label", "CRITICAL_PROCESS")?;
            let log_lines = append_html(document, el, "div", "error-log")?;
            for width in ["full", "two-thirds", "three-quarters"] {
                append_html(document, &log_lines, "div", &format!("log-line log-line--{width}"))?;
            }
        }
        LayerId::RightPlate => {
            append_text(document, el, "span", "layer-label", "STREAM_01")?;
            let stream = append_html(document, el, "div", "binary-stream")?;
            for line in BINARY_STREAM {
                append_text(document, &stream, "div", "", line)?;
            }
        }
        LayerId::Header => {
            let lights = append_html(document, el, "div", "window-lights")?;
            for color in ["red", "yellow", "green"] {
                append_html(document, &lights, "div", &format!("light light--{color}"))?;
            }
            append_text(document, el, "div", "workspace-path", &project.workspace_path())?;
            append_html(document, el, "div", "icon icon--maximize")?;
        }
        LayerId::Footer => {
            let tags = append_html(document, el, "div", "tags")?;
            for tag in project.tags {
                append_text(document, &tags, "span", "tag", tag)?;
            }
            let links = append_html(document, el, "div", "links")?;
            for (href, class) in [(project.github, "link link--github"), (project.link, "link link--external")] {
                if href.trim().is_empty() {
                    continue;
                }
                let a = append_html(document, &links, "a", class)?;
                let _ = a.set_attribute("href", href);
            }
        }
        LayerId::Core | LayerId::Title | LayerId::Description => {}
    }
    Ok(())
}

/// Fills the core panel and returns the content container that hosts the
/// title and description layers.
fn fill_core(
    document: &web::Document,
    el: &web::HtmlElement,
    project: &Project,
) -> anyhow::Result<web::HtmlElement> {
    let texture = append_html(document, el, "div", "core-texture")?;
    set_style(&texture, "transform", "translateZ(-80px) scale(1.5)");

    let image = match project.image_source() {
        ImageSource::Url(url) => {
            let image = append_html(document, el, "div", "card-image")?;
            set_style(&image, "background-image", &format!("url(\"{url}\")"));
            image
        }
        ImageSource::Placeholder => append_html(document, el, "div", PLACEHOLDER_CLASS)?,
    };
    set_style(&image, "transform", "translateZ(-50px) scale(1.1)");

    append_html(document, el, "div", "card-content")
}
