//! Templates available on first start.

use crate::element::factory::{create_image, create_markdown, create_text, create_title};
use crate::element::{Block, Element, FontWeight, TextAlign};

use super::Template;

pub const IMAGE_LAYOUT: &str = "Image layout";
pub const BOOK_INTRO: &str = "Book introduction";
pub const MARKDOWN_SAMPLE: &str = "Markdown sample";

pub fn builtin_templates() -> Vec<Template> {
    vec![image_layout(), book_intro(), markdown_sample()]
}

fn image_layout() -> Template {
    let mut title = create_title("title_1", 50.0, 50.0);
    title.text = "Beautiful image layout".to_owned();
    title.font_size = 28;
    title.text_align = TextAlign::Center;
    title.width = 500.0;
    title.height = 60.0;

    let mut image = create_image("img_1", 50.0, 130.0);
    image.src = "https://via.placeholder.com/600x400.png".to_owned();
    image.width = 600.0;
    image.height = 400.0;

    let mut caption = create_text("text_1", 50.0, 550.0);
    caption.text = "Image description".to_owned();
    caption.color = "#555555".to_owned();
    caption.text_align = TextAlign::Center;
    caption.width = 600.0;

    let elements: Vec<Element> = vec![
        Block::Title(title).into(),
        Block::Image(image).into(),
        Block::Text(caption).into(),
    ];
    Template::new(IMAGE_LAYOUT, &elements)
}

fn book_intro() -> Template {
    let mut title = create_title("book_title", 50.0, 50.0);
    title.text = "Recommended books this week".to_owned();
    title.font_size = 32;
    title.font_weight = FontWeight::Bold;
    title.text_align = TextAlign::Center;
    title.width = 600.0;
    title.height = 60.0;

    let mut cover = create_image("book_1", 50.0, 130.0);
    cover.src = "https://via.placeholder.com/120x180.png".to_owned();
    cover.width = 120.0;
    cover.height = 180.0;

    let mut info = create_text("book_info_1", 190.0, 130.0);
    info.text = "Book one\nAuthor: Author name\nA rich, rewarding read.".to_owned();
    info.font_size = 14;
    info.width = 400.0;
    info.height = 180.0;

    let elements: Vec<Element> = vec![
        Block::Title(title).into(),
        Block::Image(cover).into(),
        Block::Text(info).into(),
    ];
    Template::new(BOOK_INTRO, &elements)
}

fn markdown_sample() -> Template {
    let mut block = create_markdown("md_example", 50.0, 50.0);
    block.content = "# Welcome to the markdown template\n\nThis paragraph has **bold** and *italic* text.\n\n- Item 1\n- Item 2\n- Item 3\n\n> A quoted line".to_owned();
    block.width = 600.0;
    block.height = 400.0;

    Template::new(MARKDOWN_SAMPLE, &[Block::Markdown(block).into()])
}
