use serde::Serialize;

use crate::content::{fallback_instructions, HeroImage, ImageLoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Input control shown inside a form block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    TextArea,
    Select { options: Vec<String> },
    FilePicker { accept: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub widget: Widget,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            required,
            widget: Widget::TextInput,
        }
    }

    pub fn text_area(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            required,
            widget: Widget::TextArea,
        }
    }

    pub fn select<I, S>(name: &'static str, label: &'static str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            label,
            required: true,
            widget: Widget::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub label: String,
    pub blocks: Vec<ContentBlock>,
}

/// One renderable element of the content tree handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
    },
    Field {
        label: String,
        value: String,
    },
    List {
        items: Vec<String>,
    },
    Metric {
        label: String,
        value: u64,
    },
    Link {
        label: String,
        url: String,
    },
    Badge {
        text: String,
    },
    Notice {
        level: NoticeLevel,
        message: String,
    },
    Image {
        url: String,
        media_type: String,
        caption: String,
    },
    ImageUnavailable {
        message: String,
        instructions: Vec<String>,
    },
    Card {
        title: String,
        blocks: Vec<ContentBlock>,
    },
    Tabs {
        tabs: Vec<Tab>,
    },
    Form {
        id: &'static str,
        fields: Vec<FormField>,
        submit_label: &'static str,
        action: &'static str,
    },
    Action {
        label: String,
        action: String,
    },
    Divider,
}

impl ContentBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Field {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn metric(label: impl Into<String>, value: u64) -> Self {
        Self::Metric {
            label: label.into(),
            value,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn notice(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self::Notice {
            level,
            message: message.into(),
        }
    }

    pub fn card(title: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self::Card {
            title: title.into(),
            blocks,
        }
    }

    /// Hero picture, or the replacement instructions when the reference could not be used.
    pub fn hero(image: &Result<HeroImage, ImageLoadError>) -> Self {
        match image {
            Ok(image) => Self::Image {
                url: image.url.clone(),
                media_type: image.media_type.clone(),
                caption: image.caption.clone(),
            },
            Err(_) => Self::ImageUnavailable {
                message: "Image could not be loaded".to_string(),
                instructions: fallback_instructions()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    pub fn new(heading: impl Into<String>, blocks: Vec<ContentBlock>) -> Self {
        Self {
            heading: heading.into(),
            blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub view: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the host needs for one refresh of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub tagline: String,
    pub hero: ContentBlock,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavigationEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<ContentBlock>,
    pub sections: Vec<Section>,
    pub footer: Vec<String>,
}

impl Page {
    pub fn section(&self, heading: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.heading == heading)
    }

    /// All blocks in document order, descending into cards and tabs.
    pub fn blocks(&self) -> Vec<&ContentBlock> {
        let mut out = Vec::new();
        for section in &self.sections {
            collect_blocks(&section.blocks, &mut out);
        }
        out
    }
}

fn collect_blocks<'a>(blocks: &'a [ContentBlock], out: &mut Vec<&'a ContentBlock>) {
    for block in blocks {
        out.push(block);
        match block {
            ContentBlock::Card { blocks, .. } => collect_blocks(blocks, out),
            ContentBlock::Tabs { tabs } => {
                for tab in tabs {
                    collect_blocks(&tab.blocks, out);
                }
            }
            _ => {}
        }
    }
}
