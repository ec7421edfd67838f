//! Fake dataset generation for the mock API.
//!
//! Produces workspaces, channels under random workspaces, articles under
//! random channels and videos referencing up to five distinct articles. All
//! randomness comes from the caller's RNG, so a seeded RNG yields the same
//! dataset for the same `now`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::DomainSuffix;
use fake::faker::lorem::en::{Paragraph, Paragraphs, Sentence, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::records::{Article, Channel, Video, VideoStatus, Workspace};
use crate::store::{DocumentStore, StoreError};

const SEGMENT_EXTENSIONS: &[&str] = &["mp4", "mov", "avi"];

/// How many records of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOptions {
    pub workspaces: usize,
    pub channels: usize,
    pub articles: usize,
    pub videos: usize,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            workspaces: 5,
            channels: 50,
            articles: 50,
            videos: 50,
        }
    }
}

/// A generated dataset, ready to be written to a store.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub workspaces: Vec<Workspace>,
    pub channels: Vec<Channel>,
    pub articles: Vec<Article>,
    pub videos: Vec<Video>,
}

impl Dataset {
    /// Overwrite all four collections with this dataset.
    pub async fn save(&self, store: &dyn DocumentStore) -> Result<(), StoreError> {
        store.save(&self.workspaces).await?;
        store.save(&self.channels).await?;
        store.save(&self.articles).await?;
        store.save(&self.videos).await?;
        info!(
            workspaces = self.workspaces.len(),
            channels = self.channels.len(),
            articles = self.articles.len(),
            videos = self.videos.len(),
            "Saved generated dataset"
        );
        Ok(())
    }
}

/// Generate a dataset. Children are only generated when at least one parent exists.
pub fn generate<R: Rng>(options: &SeedOptions, now: NaiveDateTime, rng: &mut R) -> Dataset {
    let mut faker = Faker { rng, now };

    let workspaces: Vec<Workspace> = (0..options.workspaces)
        .map(|_| {
            let (created_at, updated_at) = faker.timestamps();
            Workspace {
                id: faker.id(),
                name: faker.company(),
                created_at: Some(created_at),
                updated_at: Some(updated_at),
            }
        })
        .collect();

    let workspace_ids: Vec<&str> = workspaces.iter().map(|w| w.id.as_str()).collect();
    let mut channels = Vec::with_capacity(options.channels);
    for _ in 0..options.channels {
        let Some(workspace_id) = workspace_ids.choose(&mut *faker.rng) else {
            break;
        };
        let (created_at, updated_at) = faker.timestamps();
        channels.push(Channel {
            id: faker.id(),
            workspace_id: workspace_id.to_string(),
            category: faker.word(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        });
    }

    let channel_ids: Vec<&str> = channels.iter().map(|c| c.id.as_str()).collect();
    let mut articles = Vec::with_capacity(options.articles);
    for _ in 0..options.articles {
        let Some(channel_id) = channel_ids.choose(&mut *faker.rng) else {
            break;
        };
        let image_count = faker.rng.random_range(1..=3);
        let related_count = faker.rng.random_range(2..=5);
        let (created_at, updated_at) = faker.timestamps();
        articles.push(Article {
            id: faker.id(),
            channel_id: channel_id.to_string(),
            title: faker.sentence(),
            content: faker.paragraphs(5).join("\n\n"),
            original_url: faker.url(),
            related_urls: (0..related_count).map(|_| faker.url()).collect(),
            images: (0..image_count).map(|_| faker.image_url()).collect(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        });
    }

    let article_ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    let mut videos = Vec::with_capacity(options.videos);
    for _ in 0..options.videos {
        let Some(channel_id) = channel_ids.choose(&mut *faker.rng) else {
            break;
        };
        let related = faker.rng.random_range(0..=5);
        let related_article_ids = if related <= article_ids.len() {
            article_ids
                .choose_multiple(&mut *faker.rng, related)
                .map(|id| id.to_string())
                .collect()
        } else {
            Vec::new()
        };
        let segment_count = faker.rng.random_range(2..=4);
        let (created_at, updated_at) = faker.timestamps();
        videos.push(Video {
            id: faker.id(),
            channel_id: channel_id.to_string(),
            article_ids: related_article_ids,
            title: Some(faker.sentence()),
            description: Some(faker.paragraph()),
            status: *VideoStatus::ALL.choose(&mut *faker.rng).unwrap_or(&VideoStatus::Draft),
            result_video_url: Some(faker.url()),
            audio_file: Some(faker.file_name("mp3")),
            video_segments: (0..segment_count)
                .map(|_| {
                    let ext = faker.pick(SEGMENT_EXTENSIONS);
                    faker.file_name(ext)
                })
                .collect(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        });
    }

    Dataset {
        workspaces,
        channels,
        articles,
        videos,
    }
}

struct Faker<'r, R: Rng> {
    rng: &'r mut R,
    now: NaiveDateTime,
}

impl<R: Rng> Faker<'_, R> {
    fn id(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.random())
            .into_uuid()
            .to_string()
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut *self.rng).copied().unwrap_or_default()
    }

    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut *self.rng)
    }

    fn company(&mut self) -> String {
        CompanyName().fake_with_rng(&mut *self.rng)
    }

    fn sentence(&mut self) -> String {
        Sentence(4..10).fake_with_rng(&mut *self.rng)
    }

    fn paragraph(&mut self) -> String {
        Paragraph(3..7).fake_with_rng(&mut *self.rng)
    }

    fn paragraphs(&mut self, count: usize) -> Vec<String> {
        Paragraphs(count..count + 1).fake_with_rng(&mut *self.rng)
    }

    fn url(&mut self) -> String {
        let host = self.word();
        let suffix: String = DomainSuffix().fake_with_rng(&mut *self.rng);
        let path = self.word();
        format!("https://www.{host}.{suffix}/{path}")
    }

    fn image_url(&mut self) -> String {
        let width = self.rng.random_range(2..=8) * 100;
        let height = self.rng.random_range(2..=8) * 100;
        format!("https://picsum.photos/{width}/{height}")
    }

    fn file_name(&mut self, extension: &str) -> String {
        format!("{}_{}.{extension}", self.word(), self.word())
    }

    /// `created_at` within the current year, `updated_at` between it and now.
    fn timestamps(&mut self) -> (NaiveDateTime, NaiveDateTime) {
        let year_start = NaiveDate::from_ymd_opt(self.now.year(), 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(self.now);
        let span = (self.now - year_start).num_seconds().max(0);
        let created_at = year_start + Duration::seconds(self.rng.random_range(0..=span));
        let remaining = (self.now - created_at).num_seconds().max(0);
        let updated_at = created_at + Duration::seconds(self.rng.random_range(0..=remaining));
        (created_at, updated_at)
    }
}
