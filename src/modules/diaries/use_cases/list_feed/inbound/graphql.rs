use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::diaries::use_cases::list_feed::view::FeedItem;
use crate::shared::time::clock::ClockReading;
use crate::shell::graphql::{require_session, to_gql_error};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlFeedEntry {
    pub id: i64,
    pub content: String,
    pub date: String,
    pub source_time: String,
    pub target_time: Option<String>,
    pub image_urls: Vec<String>,
    pub author_id: String,
    pub author_nickname: String,
    pub is_owner: bool,
    pub created_at: i64,
}

impl From<FeedItem> for GqlFeedEntry {
    fn from(v: FeedItem) -> Self {
        Self {
            id: v.entry.id,
            content: v.entry.content,
            date: v.entry.date,
            source_time: v.entry.source_time,
            target_time: v.target_time,
            image_urls: v.entry.image_urls.unwrap_or_default(),
            author_id: v.entry.author_id,
            author_nickname: v.entry.author_nickname,
            is_owner: v.entry.is_owner,
            created_at: v.entry.created_at,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlZoneTime {
    pub zone: String,
    pub time: String,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlClock {
    pub zones: Vec<GqlZoneTime>,
    pub days: i64,
    pub hours: i64,
    pub has_passed: bool,
    pub taken_at: i64,
}

impl From<ClockReading> for GqlClock {
    fn from(v: ClockReading) -> Self {
        Self {
            zones: v
                .zones
                .into_iter()
                .map(|z| GqlZoneTime {
                    zone: z.zone,
                    time: z.time,
                })
                .collect(),
            days: v.countdown.days,
            hours: v.countdown.hours,
            has_passed: v.countdown.has_passed(),
            taken_at: v.taken_at,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn feed(&self, context: &Context<'_>) -> GqlResult<Vec<GqlFeedEntry>> {
        let state = context.data_unchecked::<AppState>();
        let session = require_session(context)?;

        let items = state.list_feed.handle(session).await.map_err(to_gql_error)?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    async fn clock(&self, context: &Context<'_>) -> GqlClock {
        let state = context.data_unchecked::<AppState>();
        let reading = state.clock.borrow().clone();
        reading.into()
    }
}
