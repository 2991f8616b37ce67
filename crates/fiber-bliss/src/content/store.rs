use super::domain::{
    BusinessProfile, ChildrenDiscount, EmploymentType, FeaturedArticle, JobCatalog, JobCategory,
    JobListing, LeadershipRole, Perk, Product, ProductCatalog, ProductCategory, Rand, TeamMember,
};

pub const DEFAULT_HERO_IMAGE_URL: &str =
    "https://cdn-media.knitpro.eu/media/mageplaza/blog/post/brand/how-to-crochet-a-sweater-1.webp";

const BUSINESS_NAME: &str = "Kwazi's Fiber Bliss";
const TAGLINE: &str = "Love in every stitch, comfort in every thread";
const FOUNDER_NAME: &str = "Nokwazi Prudence Mbhele";
const FOUNDED_YEAR: i32 = 2017;
const INSTAGRAM: &str = "@K_FiberBliss";
const WHATSAPP: &str = "0662708613";
const ARTICLE_URL: &str =
    "https://vibeonline.co.za/academic/from-crochet-hooks-to-lab-coats-nokwazis-journey-is-pure-fire/";

/// Compiled-in content shared by the showcase and careers pages.
///
/// Everything here is fixed at build time. The two pages only differ in the
/// contact email, so each page asks for its own profile.
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    products: ProductCatalog,
    jobs: JobCatalog,
}

impl Default for StaticContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticContentStore {
    pub fn new() -> Self {
        Self {
            products: product_catalog(),
            jobs: job_catalog(),
        }
    }

    pub const fn showcase_profile(&self) -> BusinessProfile {
        profile_with_email("KFiberBliss@gmail.com")
    }

    pub const fn careers_profile(&self) -> BusinessProfile {
        profile_with_email("careers@kfibrebliss.co.za")
    }

    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    pub fn jobs(&self) -> &JobCatalog {
        &self.jobs
    }

    pub fn featured_article(&self) -> FeaturedArticle {
        FeaturedArticle {
            headline: "From Crochet Hooks to Lab Coats: Nokwazi's Journey",
            publication: "Vibe Online",
            published: "July 2025",
            url: ARTICLE_URL,
            highlights: vec![
                "First learned crocheting at age 8".to_string(),
                format!("Started business in {FOUNDED_YEAR}"),
                "MSc in Microbiology candidate".to_string(),
                "Research on water treatment solutions".to_string(),
            ],
        }
    }

    pub fn leadership(&self) -> Vec<LeadershipRole> {
        vec![
            LeadershipRole {
                title: "Founder & CEO",
                holder: Some(FOUNDER_NAME),
                highlights: vec![
                    "MSc Microbiology Candidate",
                    "Crochet Artist since age 8",
                    "Business Owner since 2017",
                ],
            },
            LeadershipRole {
                title: "Head Artisan",
                holder: None,
                highlights: vec![
                    "Lead our production team",
                    "Train new artisans",
                    "Quality assurance",
                ],
            },
            LeadershipRole {
                title: "Marketing Lead",
                holder: None,
                highlights: vec![
                    "Manage social media",
                    "Customer relationships",
                    "Sales strategy",
                ],
            },
        ]
    }

    pub fn artisans(&self) -> Vec<TeamMember> {
        vec![
            TeamMember {
                name: "Nolwandle Z.",
                role: "Ruffle Hat Specialist",
                tenure: "2 years with KFB",
            },
            TeamMember {
                name: "Nqobile T.",
                role: "Bikini Sets Expert",
                tenure: "1.5 years with KFB",
            },
            TeamMember {
                name: "Minenhle R.",
                role: "Youth Sets Creator",
                tenure: "1 year with KFB",
            },
            TeamMember {
                name: "Sabathelihle Z.",
                role: "Beanie Specialist",
                tenure: "New Apprentice",
            },
        ]
    }

    pub fn team_benefits(&self) -> &'static [Perk] {
        &[
            Perk {
                headline: "Flexible hours",
                detail: "Work around your schedule",
            },
            Perk {
                headline: "Skill development",
                detail: "Free crochet training",
            },
            Perk {
                headline: "Product discounts",
                detail: "50% off all KFB products",
            },
            Perk {
                headline: "Commission bonuses",
                detail: "Earn extra for high performance",
            },
            Perk {
                headline: "Community support",
                detail: "Be part of our family",
            },
        ]
    }

    pub fn employee_offers(&self) -> &'static [Perk] {
        &[
            Perk {
                headline: "Fair wages",
                detail: "Competitive pay for skilled work",
            },
            Perk {
                headline: "Flexible work",
                detail: "Remote and local options available",
            },
            Perk {
                headline: "Training",
                detail: "From beginner to expert level",
            },
            Perk {
                headline: "Growth",
                detail: "Opportunities for advancement",
            },
            Perk {
                headline: "Community",
                detail: "Supportive team environment",
            },
        ]
    }
}

const fn profile_with_email(email: &'static str) -> BusinessProfile {
    BusinessProfile {
        name: BUSINESS_NAME,
        tagline: TAGLINE,
        founder_name: FOUNDER_NAME,
        founded_year: FOUNDED_YEAR,
        email,
        social_handle: INSTAGRAM,
        contact_number: WHATSAPP,
    }
}

fn product(item_name: &'static str, price: u32) -> Product {
    Product {
        item_name,
        price: Rand(price),
    }
}

fn product_catalog() -> ProductCatalog {
    ProductCatalog {
        categories: vec![
            ProductCategory {
                name: "HATS",
                items: vec![
                    product("Ruffle Hats", 250),
                    product("Beanie Hats", 150),
                    product("Sun Hats", 170),
                ],
            },
            ProductCategory {
                name: "BIKINIS",
                items: vec![product("Bikini Sets", 300), product("Mix & Match", 280)],
            },
            ProductCategory {
                name: "TWO-PIECE SETS",
                items: vec![product("Youth Sets", 320), product("Seasoned Sets", 350)],
            },
            ProductCategory {
                name: "HANDBAGS",
                items: vec![product("Crochet Classy Bags", 350)],
            },
        ],
        discount: ChildrenDiscount {
            amount_off: Rand(50),
            max_age_exclusive: 7,
            code: "KIDSBUZZ7",
        },
    }
}

fn job_catalog() -> JobCatalog {
    JobCatalog {
        categories: vec![
            JobCategory {
                name: "Production & Crafting",
                listings: vec![
                    JobListing {
                        title: "Lead Crochet Artisan",
                        location: "Remote / Dondotha, KZN",
                        employment_type: EmploymentType::FullTime,
                        salary_range: "R8,000 - R12,000",
                        urgent: true,
                        description: "Lead production of handmade fashion items. Must have 3+ years crochet experience.",
                        requirements: vec![
                            "Advanced crochet skills",
                            "Pattern creation ability",
                            "Quality control",
                            "Team leadership",
                        ],
                    },
                    JobListing {
                        title: "Junior Crochet Assistant",
                        location: "Dondotha, KZN",
                        employment_type: EmploymentType::PartTimeApprentice,
                        salary_range: "R3,000 - R5,000",
                        urgent: true,
                        description: "Learn and assist in crochet production. Training provided for beginners.",
                        requirements: vec![
                            "Willingness to learn",
                            "Basic handcraft skills",
                            "Attention to detail",
                            "Reliable transportation",
                        ],
                    },
                ],
            },
            JobCategory {
                name: "Business & Operations",
                listings: vec![
                    JobListing {
                        title: "Sales & Marketing Coordinator",
                        location: "Remote",
                        employment_type: EmploymentType::Contract,
                        salary_range: "R6,000 - R9,000",
                        urgent: false,
                        description: "Handle social media, customer inquiries, and sales coordination.",
                        requirements: vec![
                            "Social media savvy",
                            "Customer service",
                            "Basic admin skills",
                            "Own smartphone/laptop",
                        ],
                    },
                    JobListing {
                        title: "Quality Control Specialist",
                        location: "Dondotha, KZN",
                        employment_type: EmploymentType::PartTime,
                        salary_range: "R4,000 - R6,000",
                        urgent: false,
                        description: "Ensure all products meet quality standards before shipping.",
                        requirements: vec![
                            "Attention to detail",
                            "Knowledge of textiles",
                            "Organizational skills",
                        ],
                    },
                ],
            },
            JobCategory {
                name: "Growth & Development",
                listings: vec![JobListing {
                    title: "Business Development Intern",
                    location: "Remote",
                    employment_type: EmploymentType::Internship,
                    salary_range: "Stipend + Commission",
                    urgent: true,
                    description: "Help expand business reach and explore new markets. Great for students.",
                    requirements: vec![
                        "Business/ Marketing student",
                        "Creative thinking",
                        "Basic computer skills",
                    ],
                }],
            },
        ],
    }
}
