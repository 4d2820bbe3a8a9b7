//! Inserts the sample blog posts used in local development.
//!
//! Posts whose slug already exists are left untouched, so the command can be
//! run repeatedly.

use anyhow::Context;
use chrono::{NaiveDate, TimeZone, Utc};
use medora_core::types::Timestamp;
use medora_db::models::blog_post::CreateBlogPost;
use medora_db::repositories::BlogPostRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const AUTHOR: &str = "Anna Solovyova";

struct SamplePost {
    title: &'static str,
    slug: &'static str,
    excerpt: &'static str,
    content: &'static str,
    category: &'static str,
    author: &'static str,
    published_on: (i32, u32, u32),
}

const SAMPLE_POSTS: &[SamplePost] = &[
    SamplePost {
        title: "Accounting x AI",
        slug: "accounting-x-ai",
        excerpt: "How artificial intelligence is transforming financial workflows and accounting processes in healthcare organizations.",
        content: "# Accounting x AI\n\nArtificial intelligence is revolutionizing how healthcare organizations handle their financial operations...",
        category: "AI & Technology",
        author: AUTHOR,
        published_on: (2024, 1, 15),
    },
    SamplePost {
        title: "Sales x AI",
        slug: "sales-x-ai",
        excerpt: "Leveraging AI to accelerate sales cycles and improve conversion rates in healthtech markets.",
        content: "# Sales x AI\n\nAI-powered sales tools are changing the game for healthtech companies...",
        category: "Sales & Growth",
        author: AUTHOR,
        published_on: (2024, 1, 10),
    },
    SamplePost {
        title: "The Future of AI is Already Here",
        slug: "future-of-ai-already-here",
        excerpt: "AI will make you 20% more efficient. Discover how early adopters are already seeing results.",
        content: "# The Future of AI is Already Here\n\nThe future isn't coming, it's already here. Healthcare organizations using AI are seeing dramatic efficiency gains...",
        category: "AI & Technology",
        author: AUTHOR,
        published_on: (2024, 1, 5),
    },
    SamplePost {
        title: "Owning the Workflow in B2B Apps",
        slug: "owning-workflow-b2b-apps",
        excerpt: "How to design B2B applications that seamlessly integrate into existing clinical workflows.",
        content: "# Owning the Workflow in B2B Apps\n\nSuccessful B2B healthtech applications don't disrupt workflows, they enhance them...",
        category: "Product Design",
        author: AUTHOR,
        published_on: (2023, 12, 20),
    },
    SamplePost {
        title: "How AI Will Turn Capital into Labor",
        slug: "ai-capital-into-labor",
        excerpt: "Exploring the economic transformation as AI capabilities become more accessible and affordable.",
        content: "# How AI Will Turn Capital into Labor\n\nThe democratization of AI is fundamentally changing how we think about capital and labor...",
        category: "Economics & Strategy",
        author: AUTHOR,
        published_on: (2023, 12, 15),
    },
    SamplePost {
        title: "Need for Speed in AI Sales: AI Doesn't Just Change What You Sell. It Also Changes How You Sell It.",
        slug: "need-for-speed-ai-sales",
        excerpt: "Enterprise sales are evolving fast. Startups are now adapting their GTM playbooks for the AI era: faster pilots, proof-driven demos, and higher trust standards.",
        content: "# Need for Speed in AI Sales\n\nEnterprise sales are evolving fast. Startups are now adapting their GTM playbooks for the AI era...",
        category: "Sales & Growth",
        author: "Seema Amble and James da Costa",
        published_on: (2023, 12, 10),
    },
    SamplePost {
        title: "Investing in Stuut: Automating Accounts Receivable",
        slug: "investing-in-stuut",
        excerpt: "Contrary to popular belief, once you've sold something, people don't just rush to pay you.",
        content: "# Investing in Stuut\n\nContrary to popular belief, once you've sold something, people don't just rush to pay you...",
        category: "Investments",
        author: "Seema Amble, Joe Schmidt, and Brian Roberts",
        published_on: (2023, 12, 5),
    },
    SamplePost {
        title: "Investing in Sphere",
        slug: "investing-in-sphere",
        excerpt: "As more software companies launch globally from day one, they're quickly confronted by a nasty surprise: international compliance and regulatory challenges.",
        content: "# Investing in Sphere\n\nAs more software companies launch globally from day one, they're quickly confronted by international challenges...",
        category: "Investments",
        author: "Marc Andrusko",
        published_on: (2023, 11, 28),
    },
];

fn published_at((year, month, day): (i32, u32, u32)) -> anyhow::Result<Timestamp> {
    let midnight = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .with_context(|| format!("invalid sample date {year}-{month}-{day}"))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medora_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = medora_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    medora_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let mut inserted = 0usize;
    for sample in SAMPLE_POSTS {
        if BlogPostRepo::find_by_slug(&pool, sample.slug).await?.is_some() {
            tracing::info!(slug = sample.slug, "Sample post exists, skipping");
            continue;
        }

        let input = CreateBlogPost {
            title: sample.title.to_string(),
            slug: Some(sample.slug.to_string()),
            excerpt: sample.excerpt.to_string(),
            content: sample.content.to_string(),
            category: sample.category.to_string(),
            author: sample.author.to_string(),
            cover_image: None,
            published: Some(true),
            published_at: Some(published_at(sample.published_on)?),
        };

        let post = BlogPostRepo::create(&pool, &input, sample.slug)
            .await
            .with_context(|| format!("Failed to insert '{}'", sample.title))?;
        tracing::info!(post_id = post.id, slug = %post.slug, "Inserted sample post");
        inserted += 1;
    }

    tracing::info!(inserted, total = SAMPLE_POSTS.len(), "Seeding complete");
    Ok(())
}
