use crate::dom::Element;

pub const DEFAULT_CONTAINER_CLASS: &str = "repo-list";

/// HTML document shell holding the repository list container
#[derive(Debug, Clone)]
pub struct Page {
    root: Element,
    container_class: String,
}

impl Page {
    pub fn new(title: &str, container_class: &str) -> Self {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(title));

        let body = Element::new("body").child(
            Element::new("main")
                .child(Element::new("h1").text(title))
                .child(Element::new("ul").attr("class", container_class)),
        );

        let root = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(body);

        Page {
            root,
            container_class: container_class.to_string(),
        }
    }

    /// The list the renderer appends to. `None` when the configured class is
    /// not a single class token (empty or containing whitespace).
    pub fn container_mut(&mut self) -> Option<&mut Element> {
        self.root.find_by_class_mut(&self.container_class)
    }

    pub fn container(&self) -> Option<&Element> {
        self.root.find_by_class(&self.container_class)
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new("Repositories", DEFAULT_CONTAINER_CLASS)
    }
}
