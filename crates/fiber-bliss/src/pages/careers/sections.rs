use super::view::CareersView;
use crate::applications::{ApplicationRecord, ApplicationStatistics, LookupOutcome};
use crate::content::{BusinessProfile, DerivedMetrics, StaticContentStore};
use crate::forms::{Availability, CrochetExperience, ExperienceLevel, POSITION_PLACEHOLDER};
use crate::pages::blocks::{ContentBlock, FormField, NoticeLevel, Section, Tab, Widget};

/// Inputs shared by every careers section for one refresh.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub store: &'a StaticContentStore,
    pub profile: &'a BusinessProfile,
    pub metrics: DerivedMetrics,
    pub applications: &'a [ApplicationRecord],
    pub lookup: &'a LookupOutcome,
}

/// View selector: the chosen view decides which section is built, nothing else does.
pub fn select_section(view: CareersView, ctx: &SectionContext<'_>) -> Section {
    let blocks = match view {
        CareersView::Welcome => welcome(ctx),
        CareersView::JobOpenings => job_openings(ctx),
        CareersView::ApplyNow => apply_now(ctx),
        CareersView::OurTeam => our_team(ctx),
        CareersView::Applications => applications(ctx),
        CareersView::About => about(ctx),
    };
    Section::new(view.heading(), blocks)
}

fn count(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn welcome(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let metrics = ctx.metrics;
    vec![
        ContentBlock::metric("Current Openings", count(metrics.total_openings)),
        ContentBlock::metric("Urgent Hiring", count(metrics.urgent_openings)),
        ContentBlock::metric("Years Growing", u64::from(metrics.years_in_business)),
        ContentBlock::heading(3, "Why Work With Us?"),
        ContentBlock::card(
            "Skill Development",
            vec![ContentBlock::list([
                "Learn traditional and modern crochet techniques",
                "Business training provided",
                "Career growth opportunities",
            ])],
        ),
        ContentBlock::card(
            "Supportive Environment",
            vec![ContentBlock::list([
                "Women-led business",
                "Family-friendly policies",
                "Flexible working arrangements",
            ])],
        ),
        ContentBlock::card(
            "Community Impact",
            vec![ContentBlock::list([
                "Create beautiful handmade products",
                "Support rural employment",
                "Be part of a growing success story",
            ])],
        ),
        ContentBlock::Divider,
        ContentBlock::heading(3, "Our Founder's Vision"),
        ContentBlock::text(format!("{}, Founder & CEO", ctx.profile.founder_name)),
        ContentBlock::text(
            "I started Kwazi's Fiber Bliss not just as a business, but as a platform to empower \
             others. From teaching young girls crochet to providing employment in our community, \
             every stitch represents opportunity and growth.",
        ),
        ContentBlock::link("Read Founder's Story", ctx.store.featured_article().url),
    ]
}

fn job_openings(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let tabs = ctx
        .store
        .jobs()
        .categories
        .iter()
        .map(|category| {
            let mut blocks = vec![ContentBlock::heading(
                3,
                format!("{} Positions", category.name),
            )];
            for listing in &category.listings {
                let mut card = Vec::new();
                if listing.urgent {
                    card.push(ContentBlock::Badge {
                        text: "URGENT".to_string(),
                    });
                }
                card.extend([
                    ContentBlock::field("Location", listing.location),
                    ContentBlock::field("Type", listing.employment_type.label()),
                    ContentBlock::field("Salary", listing.salary_range),
                    ContentBlock::field("Description", listing.description),
                    ContentBlock::text("Requirements:"),
                    ContentBlock::list(listing.requirements.iter().copied()),
                    ContentBlock::Action {
                        label: format!("Apply for {}", listing.title),
                        action: format!("/api/v1/careers/jobs/{}/apply", listing.slug()),
                    },
                ]);
                blocks.push(ContentBlock::card(listing.title, card));
            }
            Tab {
                label: category.name.to_string(),
                blocks,
            }
        })
        .collect();

    vec![ContentBlock::Tabs { tabs }]
}

fn apply_now(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let positions = std::iter::once(POSITION_PLACEHOLDER).chain(ctx.store.jobs().titles());

    let form = ContentBlock::Form {
        id: "job_application_form",
        fields: vec![
            FormField::text("full_name", "Full Name *", true),
            FormField::text("email", "Email Address *", true),
            FormField::text("phone", "Phone Number *", true),
            FormField::text("location", "Current Location/Town *", true),
            FormField::select("position", "Position Applying For *", positions),
            FormField::select(
                "experience",
                "Years of Relevant Experience *",
                ExperienceLevel::ordered().map(ExperienceLevel::label),
            ),
            FormField::select(
                "crochet_experience",
                "Do you have crochet experience? *",
                CrochetExperience::ordered().map(CrochetExperience::label),
            ),
            FormField::select(
                "availability",
                "When can you start? *",
                Availability::ordered().map(Availability::label),
            ),
            FormField::text_area(
                "why_join",
                "Why do you want to join Kwazi's Fiber Bliss?",
                false,
            ),
            FormField {
                name: "resume",
                label: "Upload Resume/CV (PDF or DOC)",
                required: false,
                widget: Widget::FilePicker {
                    accept: vec!["pdf", "doc", "docx"],
                },
            },
        ],
        submit_label: "Submit Application",
        action: "/api/v1/careers/applications",
    };

    vec![
        form,
        ContentBlock::card(
            "Application Tips",
            vec![ContentBlock::list([
                "Be specific about your crochet experience",
                "Mention if you have your own tools",
                "Share why our mission resonates with you",
                "Include portfolio photos if available",
            ])],
        ),
        ContentBlock::card(
            "Application Process",
            vec![ContentBlock::list([
                "Submit this form",
                "Initial phone screening",
                "Skills assessment",
                "Final interview",
                "Offer & onboarding",
            ])],
        ),
    ]
}

fn our_team(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let mut blocks = vec![ContentBlock::heading(3, "Leadership")];
    blocks.extend(ctx.store.leadership().into_iter().map(|role| {
        ContentBlock::card(
            role.title,
            vec![
                ContentBlock::text(role.holder.unwrap_or("Position Available")),
                ContentBlock::list(role.highlights),
            ],
        )
    }));

    blocks.push(ContentBlock::heading(3, "Current Artisans"));
    blocks.push(ContentBlock::list(
        ctx.store
            .artisans()
            .into_iter()
            .map(|member| format!("{} - {} ({})", member.name, member.role, member.tenure)),
    ));

    blocks.push(ContentBlock::Divider);
    blocks.push(ContentBlock::heading(3, "Team Benefits"));
    blocks.push(ContentBlock::list(
        ctx.store
            .team_benefits()
            .iter()
            .map(|perk| format!("{} - {}", perk.headline, perk.detail)),
    ));
    blocks
}

fn applications(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::text("For Applicants: Check your application status here"),
        ContentBlock::Form {
            id: "application_lookup",
            fields: vec![FormField::text(
                "application_id",
                "Enter your Application ID (e.g., KFB-APP1001)",
                false,
            )],
            submit_label: "Check Status",
            action: "/api/v1/careers/views/applications",
        },
    ];

    match ctx.lookup {
        LookupOutcome::Skipped => {}
        LookupOutcome::Found { application } => {
            blocks.push(ContentBlock::card(
                "Application",
                vec![
                    ContentBlock::field("Application ID", application.application_id.as_str()),
                    ContentBlock::field("Applicant", application.applicant),
                    ContentBlock::field("Position", application.position),
                    ContentBlock::field("Status", application.status_label),
                    ContentBlock::field("Applied Date", application.applied_date_label.as_str()),
                ],
            ));
            blocks.push(ContentBlock::notice(
                application.status.notice_level(),
                application.explanation,
            ));
        }
        LookupOutcome::NotFound { message, .. } => {
            blocks.push(ContentBlock::notice(NoticeLevel::Error, *message));
        }
    }

    let stats = ApplicationStatistics::from_records(ctx.applications);
    blocks.extend([
        ContentBlock::Divider,
        ContentBlock::heading(3, "Application Statistics"),
        ContentBlock::metric("Total Applications", count(stats.total)),
        ContentBlock::metric("Under Review", count(stats.under_review)),
        ContentBlock::metric("Interviews Scheduled", count(stats.interviews_scheduled)),
    ]);
    blocks
}

fn about(ctx: &SectionContext<'_>) -> Vec<ContentBlock> {
    let profile = ctx.profile;
    vec![
        ContentBlock::heading(3, "Our Story"),
        ContentBlock::text(format!(
            "Founded in {} by {}, {} began as a passion project that grew into a thriving \
             business. What started with crochet hooks and yarn has become a platform for \
             empowerment, creativity, and community development.",
            profile.founded_year, profile.founder_name, profile.name
        )),
        ContentBlock::field(
            "Our Mission",
            "To create beautiful handmade fashion while providing employment opportunities and \
             skill development in our community.",
        ),
        ContentBlock::field(
            "Our Vision",
            "To be a leading sustainable fashion brand that empowers artisans across South Africa.",
        ),
        ContentBlock::Divider,
        ContentBlock::heading(3, "What We Offer Employees"),
        ContentBlock::list(
            ctx.store
                .employee_offers()
                .iter()
                .map(|perk| format!("{} - {}", perk.headline, perk.detail)),
        ),
        ContentBlock::card(
            "Location",
            vec![ContentBlock::list([
                "Headquarters: Ward 9, Dondotha",
                "uMfolozi Local Municipality",
                "KwaZulu-Natal, South Africa",
            ])],
        ),
        ContentBlock::card(
            "Contact HR",
            vec![
                ContentBlock::field("Email", profile.email),
                ContentBlock::field("WhatsApp", profile.contact_number),
                ContentBlock::field("Hours", "Mon-Fri, 9am-5pm"),
            ],
        ),
        ContentBlock::link(
            "Read Our Feature in Vibe Online",
            ctx.store.featured_article().url,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::count;

    #[test]
    fn counts_convert_without_wrapping() {
        assert_eq!(count(0), 0);
        assert_eq!(count(5), 5);
        assert_eq!(count(usize::MAX), usize::MAX as u64);
    }
}
