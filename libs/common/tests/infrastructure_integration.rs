//! Integration tests for the infrastructure components
//!
//! These tests verify that the PostgreSQL database and Redis cache are
//! properly configured and accessible. They are ignored by default so the
//! suite stays green on machines without live services.

use common::{
    cache::{Cache, RedisConfig},
    database::{DatabaseConfig, health_check, init_pool},
};
use sqlx::Row;

#[tokio::test]
#[ignore = "requires running Postgres and Redis instances"]
async fn test_infrastructure_integration() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize PostgreSQL connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Verify PostgreSQL connectivity
    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
    let result: i32 = row.get("result");
    assert_eq!(result, 1, "PostgreSQL simple query test failed");

    // Initialize Redis
    let redis_config = RedisConfig::from_env()?;
    let cache = Cache::new(&redis_config)?;

    assert!(cache.health_check().await?, "Redis health check failed");

    let test_key = "integration_test_key";
    let test_value = "integration_test_value";

    cache.set(test_key, test_value, Some(10)).await?;

    let retrieved_value = cache.get(test_key).await?;
    assert_eq!(
        retrieved_value,
        Some(test_value.to_string()),
        "Redis SET/GET test failed"
    );

    cache.delete(test_key).await?;

    let retrieved_value = cache.get(test_key).await?;
    assert_eq!(retrieved_value, None, "Redis delete operation failed");

    Ok(())
}
