//! In-memory caching using moka
//!
//! Room records change whenever the front desk books or reserves, so rooms
//! use short TTLs. Categories and their base rates rarely change.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db;
use crate::error::Result;
use crate::models::{Room, RoomCategory};

const ALL_ROOMS_KEY: &str = "rooms:all";
const ALL_CATEGORIES_KEY: &str = "categories:all";

/// Application cache holding room and category records
#[derive(Clone)]
pub struct AppCache {
    /// Single rooms (id -> Room)
    pub rooms: Cache<Uuid, Arc<Room>>,
    /// Room listings (cache_key -> Vec<Room>)
    pub room_listings: Cache<String, Arc<Vec<Room>>>,
    /// Room categories (cache_key -> Vec<RoomCategory>)
    pub categories: Cache<String, Arc<Vec<RoomCategory>>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Rooms: 1000 entries, 60 s TTL
            rooms: Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(60))
                .build(),

            // Room listings: a handful of keys, 60 s TTL
            room_listings: Cache::builder()
                .max_capacity(10)
                .time_to_live(Duration::from_secs(60))
                .build(),

            // Categories: 30 min TTL, 10 min idle
            categories: Cache::builder()
                .max_capacity(10)
                .time_to_live(Duration::from_secs(30 * 60))
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            rooms_size: self.rooms.entry_count(),
            room_listings_size: self.room_listings.entry_count(),
            categories_cached: self.categories.entry_count() > 0,
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.rooms.invalidate_all();
        self.room_listings.invalidate_all();
        self.categories.invalidate_all();
        info!("All caches invalidated");
    }

    /// Invalidate a specific room and every listing that includes it
    pub async fn invalidate_room(&self, room_id: Uuid) {
        self.rooms.invalidate(&room_id).await;
        self.room_listings.invalidate_all();
        info!("Cache invalidated for room: {}", room_id);
    }

    /// All rooms, from cache or database
    pub async fn all_rooms(&self, pool: &PgPool) -> Result<Arc<Vec<Room>>> {
        if let Some(cached) = self.room_listings.get(ALL_ROOMS_KEY).await {
            tracing::debug!("Cache HIT for room listing");
            return Ok(cached);
        }

        tracing::debug!("Cache MISS for room listing");
        let rooms = Arc::new(db::list_rooms(pool).await?);
        self.store_rooms(rooms.clone()).await;
        Ok(rooms)
    }

    /// One room, from cache or database
    pub async fn room(&self, pool: &PgPool, room_id: Uuid) -> Result<Option<Arc<Room>>> {
        if let Some(cached) = self.rooms.get(&room_id).await {
            tracing::debug!("Cache HIT for room: {}", room_id);
            return Ok(Some(cached));
        }

        tracing::debug!("Cache MISS for room: {}", room_id);
        let Some(room) = db::get_room(pool, room_id).await? else {
            return Ok(None);
        };
        let room = Arc::new(room);
        self.rooms.insert(room_id, room.clone()).await;
        Ok(Some(room))
    }

    /// All room categories, from cache or database
    pub async fn all_categories(&self, pool: &PgPool) -> Result<Arc<Vec<RoomCategory>>> {
        if let Some(cached) = self.categories.get(ALL_CATEGORIES_KEY).await {
            return Ok(cached);
        }

        let categories = Arc::new(db::list_room_categories(pool).await?);
        self.categories
            .insert(ALL_CATEGORIES_KEY.to_string(), categories.clone())
            .await;
        Ok(categories)
    }

    async fn store_rooms(&self, rooms: Arc<Vec<Room>>) {
        for room in rooms.iter() {
            self.rooms.insert(room.id, Arc::new(room.clone())).await;
        }
        self.room_listings
            .insert(ALL_ROOMS_KEY.to_string(), rooms)
            .await;
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub rooms_size: u64,
    pub room_listings_size: u64,
    pub categories_cached: bool,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes it every `every`.
pub async fn start_cache_warmer(cache: AppCache, db: PgPool, every: Duration) {
    let mut interval = interval(every);
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &db).await;
    }
}

/// Warm the cache with the rooms and categories the dashboard needs
async fn warm_cache(cache: &AppCache, db: &PgPool) {
    info!("Starting cache warm-up...");

    match db::list_rooms(db).await {
        Ok(rooms) => cache.store_rooms(Arc::new(rooms)).await,
        Err(e) => warn!("Failed to warm room cache: {}", e),
    }

    match db::list_room_categories(db).await {
        Ok(categories) => {
            cache
                .categories
                .insert(ALL_CATEGORIES_KEY.to_string(), Arc::new(categories))
                .await;
        }
        Err(e) => warn!("Failed to warm category cache: {}", e),
    }

    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_cache_is_empty() {
        let cache = AppCache::new();
        let stats = cache.stats();
        assert_eq!(stats.rooms_size, 0);
        assert_eq!(stats.room_listings_size, 0);
        assert!(!stats.categories_cached);
    }

    #[tokio::test]
    async fn test_invalidate_room_drops_listing() {
        let cache = AppCache::new();
        let room = Room {
            id: Uuid::new_v4(),
            room_number: "101".to_string(),
            category_name: None,
            category_base_rate: None,
            price: None,
            status: None,
            booked_till_date: None,
            reserved_dates: vec![],
        };
        let id = room.id;
        cache.store_rooms(Arc::new(vec![room])).await;
        assert!(cache.rooms.get(&id).await.is_some());
        assert!(cache.room_listings.get(ALL_ROOMS_KEY).await.is_some());

        cache.invalidate_room(id).await;
        assert!(cache.rooms.get(&id).await.is_none());
        assert!(cache.room_listings.get(ALL_ROOMS_KEY).await.is_none());
    }
}
