//! Factory functions producing default-populated elements for each palette entry.

use std::str::FromStr;

use super::common::*;
use crate::error::UnknownComponent;
use super::{Block, DividerBlock, Element, Group, ImageBlock, MarkdownBlock, TextBlock};

/// Vertical distance between rows of the book layout.
pub const BOOK_ROW_HEIGHT: f32 = 180.0;
/// Number of cover/info rows in the book layout.
pub const BOOK_COUNT: usize = 5;

/// A component that can be dragged from the palette onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Text,
    Title,
    Image,
    Divider,
    Markdown,
    ImageLayout,
    BookLayout,
    MarkdownLayout,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Text,
        ComponentKind::Title,
        ComponentKind::Image,
        ComponentKind::Divider,
        ComponentKind::Markdown,
        ComponentKind::ImageLayout,
        ComponentKind::BookLayout,
        ComponentKind::MarkdownLayout,
    ];

    /// The drag token used by the palette.
    pub fn token(&self) -> &'static str {
        match self {
            ComponentKind::Text => "text",
            ComponentKind::Title => "title",
            ComponentKind::Image => "image",
            ComponentKind::Divider => "divider",
            ComponentKind::Markdown => "markdown",
            ComponentKind::ImageLayout => "template-image",
            ComponentKind::BookLayout => "template-book",
            ComponentKind::MarkdownLayout => "template-md",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Text => "Text",
            ComponentKind::Title => "Title",
            ComponentKind::Image => "Image",
            ComponentKind::Divider => "Divider",
            ComponentKind::Markdown => "Markdown",
            ComponentKind::ImageLayout => "Image layout",
            ComponentKind::BookLayout => "Book layout",
            ComponentKind::MarkdownLayout => "Markdown layout",
        }
    }

    /// Whether this component produces a group rather than a single block.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            ComponentKind::ImageLayout | ComponentKind::BookLayout | ComponentKind::MarkdownLayout
        )
    }
}

impl FromStr for ComponentKind {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| UnknownComponent(s.to_owned()))
    }
}

/// Create the default element for `kind` at canvas position (`x`, `y`).
///
/// Layout kinds return a group whose children derive their ids from `id`
/// and sit at fixed offsets from (`x`, `y`).
pub fn create_element(kind: ComponentKind, id: &str, x: f32, y: f32) -> Element {
    match kind {
        ComponentKind::Text => Block::Text(create_text(id, x, y)).into(),
        ComponentKind::Title => Block::Title(create_title(id, x, y)).into(),
        ComponentKind::Image => Block::Image(create_image(id, x, y)).into(),
        ComponentKind::Divider => Block::Divider(create_divider(id, x, y)).into(),
        ComponentKind::Markdown => Block::Markdown(create_markdown(id, x, y)).into(),
        ComponentKind::ImageLayout => create_image_layout(id, x, y).into(),
        ComponentKind::BookLayout => create_book_layout(id, x, y).into(),
        ComponentKind::MarkdownLayout => create_markdown_layout(id, x, y).into(),
    }
}

pub fn create_text(id: &str, x: f32, y: f32) -> TextBlock {
    TextBlock {
        id: id.to_owned(),
        x,
        y,
        width: 200.0,
        height: 40.0,
        text: "Enter text".to_owned(),
        font_size: 16,
        color: DEFAULT_TEXT_COLOR.to_owned(),
        font_weight: FontWeight::Normal,
        text_align: TextAlign::Left,
    }
}

pub fn create_title(id: &str, x: f32, y: f32) -> TextBlock {
    TextBlock {
        id: id.to_owned(),
        x,
        y,
        width: 300.0,
        height: 50.0,
        text: "Title".to_owned(),
        font_size: 24,
        color: DEFAULT_TITLE_COLOR.to_owned(),
        font_weight: FontWeight::Bold,
        text_align: TextAlign::Left,
    }
}

pub fn create_image(id: &str, x: f32, y: f32) -> ImageBlock {
    ImageBlock {
        id: id.to_owned(),
        x,
        y,
        width: 300.0,
        height: 200.0,
        src: PLACEHOLDER_IMAGE.to_owned(),
    }
}

pub fn create_divider(id: &str, x: f32, y: f32) -> DividerBlock {
    DividerBlock {
        id: id.to_owned(),
        x,
        y,
        width: 400.0,
        height: 2.0,
        color: DEFAULT_DIVIDER_COLOR.to_owned(),
    }
}

pub fn create_markdown(id: &str, x: f32, y: f32) -> MarkdownBlock {
    MarkdownBlock {
        id: id.to_owned(),
        x,
        y,
        width: 500.0,
        height: 300.0,
        content: SAMPLE_MARKDOWN.to_owned(),
        font_size: 16,
        color: DEFAULT_TEXT_COLOR.to_owned(),
    }
}

/// Title, one image and a caption stacked vertically.
pub fn create_image_layout(id: &str, x: f32, y: f32) -> Group {
    let title = TextBlock {
        width: 400.0,
        text: "Image layout title".to_owned(),
        ..create_title(&format!("{id}_title"), x, y)
    };
    let image = create_image(&format!("{id}_img1"), x, y + 70.0);
    let caption = TextBlock {
        width: 300.0,
        text: "Image caption".to_owned(),
        ..create_text(&format!("{id}_text1"), x, y + 290.0)
    };

    Group::new(
        id,
        vec![Block::Title(title), Block::Image(image), Block::Text(caption)],
    )
}

/// A heading followed by [`BOOK_COUNT`] cover/info rows.
pub fn create_book_layout(id: &str, x: f32, y: f32) -> Group {
    let mut elements = Vec::with_capacity(1 + BOOK_COUNT * 2);

    elements.push(Block::Title(TextBlock {
        width: 500.0,
        height: 60.0,
        text: "Recommended books this week".to_owned(),
        font_size: 28,
        text_align: TextAlign::Center,
        ..create_title(&format!("{id}_maintitle"), x, y)
    }));

    for i in 0..BOOK_COUNT {
        let n = i + 1;
        let row_y = y + 80.0 + i as f32 * BOOK_ROW_HEIGHT;

        elements.push(Block::Image(ImageBlock {
            width: 120.0,
            height: 160.0,
            src: PLACEHOLDER_BOOK_COVER.to_owned(),
            ..create_image(&format!("{id}_book_img{n}"), x, row_y)
        }));

        elements.push(Block::Text(TextBlock {
            width: 350.0,
            height: 160.0,
            text: format!(
                "Title: Book {n}\nAuthor: Author {n}\nSummary: A short introduction to the book's main content and highlights."
            ),
            font_size: 14,
            ..create_text(&format!("{id}_book_info{n}"), x + 140.0, row_y)
        }));
    }

    Group::new(id, elements)
}

/// A single markdown block wrapped in a group.
pub fn create_markdown_layout(id: &str, x: f32, y: f32) -> Group {
    Group::new(
        id,
        vec![Block::Markdown(create_markdown(&format!("{id}_md"), x, y))],
    )
}
