use std::sync::Arc;

use tracing::debug;

use super::blocks::{ContentBlock, FormField, Page, Section};
use crate::content::{
    fallback_instructions, DerivedMetrics, HeroImage, ImageLoadError, StaticContentStore,
};
use crate::forms::{AcknowledgeForm, Acknowledgment, InquirySubmission, ProductInterest};

/// Single-page product showcase.
#[derive(Debug, Clone)]
pub struct ShowcasePage {
    store: Arc<StaticContentStore>,
    hero: Result<HeroImage, ImageLoadError>,
}

impl ShowcasePage {
    pub fn new(store: Arc<StaticContentStore>, hero_image_url: &str) -> Self {
        let caption = format!(
            "Handmade with care since {}",
            store.showcase_profile().founded_year
        );
        let hero = HeroImage::load(hero_image_url, caption);
        if let Err(err) = &hero {
            debug!(%err, "showcase hero image unavailable, rendering instructions instead");
        }
        Self { store, hero }
    }

    pub fn hero(&self) -> &Result<HeroImage, ImageLoadError> {
        &self.hero
    }

    pub fn render(&self, current_year: i32) -> Page {
        let profile = self.store.showcase_profile();
        let metrics = DerivedMetrics::compute(&profile, self.store.jobs(), current_year);

        let about = Section::new(
            "About",
            vec![
                ContentBlock::field("Founder", profile.founder_name),
                ContentBlock::field(
                    "Journey",
                    format!(
                        "Learned crocheting at age 8. Started business in {}.",
                        profile.founded_year
                    ),
                ),
                ContentBlock::field(
                    "Experience",
                    format!(
                        "{} years professional craftsmanship",
                        metrics.years_in_business
                    ),
                ),
                ContentBlock::field("Specialty", "Handmade fashion and accessories"),
                ContentBlock::field("For", "All ages seeking unique, comfortable fashion"),
            ],
        );

        let article = self.store.featured_article();
        let featured = Section::new(
            "Featured Article",
            vec![
                ContentBlock::text(article.headline),
                ContentBlock::text(format!(
                    "Published {} in {}",
                    article.published, article.publication
                )),
                ContentBlock::text("Highlights from the article:"),
                ContentBlock::list(article.highlights.iter().cloned()),
                ContentBlock::link("Read full article", article.url),
            ],
        );

        let products = self.store.products();
        let mut price_blocks = Vec::new();
        for category in &products.categories {
            price_blocks.push(ContentBlock::heading(3, category.name));
            price_blocks.push(ContentBlock::list(
                category
                    .items
                    .iter()
                    .map(|item| format!("{}: {}", item.item_name, item.price)),
            ));
        }
        price_blocks.push(ContentBlock::field(
            "Children's Discount",
            format!(
                "{} OFF for children under {} years",
                products.discount.amount_off, products.discount.max_age_exclusive
            ),
        ));
        price_blocks.push(ContentBlock::text(format!(
            "Use code: {}",
            products.discount.code
        )));

        let contact = Section::new(
            "Contact",
            vec![
                ContentBlock::field("Email", profile.email),
                ContentBlock::field("Instagram", profile.social_handle),
                ContentBlock::field("WhatsApp", profile.contact_number),
                ContentBlock::text("Shop Coming Soon!"),
            ],
        );

        let inquiry = Section::new(
            "Send Inquiry",
            vec![ContentBlock::Form {
                id: "inquiry_form",
                fields: vec![
                    FormField::text("name", "Your Name", true),
                    FormField::text("email", "Your Email", true),
                    FormField::select(
                        "product_interest",
                        "Product Interest",
                        ProductInterest::ordered().map(ProductInterest::label),
                    ),
                    FormField::text_area("message", "Your Message", true),
                ],
                submit_label: "Send",
                action: "/api/v1/showcase/inquiries",
            }],
        );

        let image_status = match &self.hero {
            Ok(_) => "Currently using a web image.",
            Err(_) => "The configured image could not be used.",
        };
        let image_help = Section::new(
            "Image Help",
            vec![
                ContentBlock::text(image_status),
                ContentBlock::list(fallback_instructions()),
            ],
        );

        Page {
            title: profile.name.to_string(),
            tagline: profile.tagline.to_string(),
            hero: ContentBlock::hero(&self.hero),
            navigation: Vec::new(),
            sidebar: Vec::new(),
            sections: vec![
                about,
                featured,
                Section::new("Products & Prices", price_blocks),
                contact,
                inquiry,
                image_help,
            ],
            footer: vec![
                format!(
                    "© {}-{} {}",
                    profile.founded_year, current_year, profile.name
                ),
                format!(
                    "Crafting since childhood • Business since {}",
                    profile.founded_year
                ),
            ],
        }
    }

    pub fn submit_inquiry(&self, submission: &InquirySubmission) -> Acknowledgment {
        submission.acknowledge()
    }
}
