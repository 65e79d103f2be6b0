//! Integration tests for coordinated profile generation.
//!
//! A scripted generator stands in for the text-generation service so the
//! tests can control latency and payloads.

use async_trait::async_trait;
use roi_core::ProfilePatch;
use roi_profile::{
    parse_profile_response, GenerationError, PresetGenerator, ProfileCoordinator,
    ProfileGenerator, Scenario,
};
use std::sync::Arc;
use std::time::Duration;

/// Replies with a canned payload after a delay keyed on the description
struct ScriptedGenerator;

#[async_trait]
impl ProfileGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, description: &str) -> Result<ProfilePatch, GenerationError> {
        let (delay_ms, body) = match description {
            "slow" => (200, r#"{"monthlyBookings":100,"avgJobValue":500,"schedulingTime":10,"hourlyRate":40,"missedCallsPerWeek":20,"noShowRate":20,"conversionRate":40}"#),
            "fast" => (10, r#"{"monthlyBookings":30,"avgJobValue":120,"schedulingTime":3,"hourlyRate":30,"missedCallsPerWeek":5,"noShowRate":5,"conversionRate":80}"#),
            "oversized" => (0, r#"{"monthlyBookings":5000,"avgJobValue":120,"schedulingTime":3,"hourlyRate":30,"missedCallsPerWeek":5,"noShowRate":5,"conversionRate":80}"#),
            "garbage" => (0, "not json at all"),
            _ => return Err(GenerationError::Upstream("service unavailable".to_string())),
        };
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        parse_profile_response(body)
    }
}

// =============================================================================
// Last-write-wins
// =============================================================================

#[tokio::test]
async fn test_newer_request_wins() {
    let coordinator = Arc::new(ProfileCoordinator::new(Arc::new(ScriptedGenerator)));

    let slow = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.generate("slow").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fast = coordinator.generate("fast").await.unwrap();

    let slow = slow.await.unwrap().unwrap();
    assert!(slow.is_none(), "superseded result must be discarded");

    let fast = fast.expect("latest request should produce a patch");
    assert_eq!(fast.monthly_bookings, Some(30));
}

#[tokio::test]
async fn test_only_latest_result_reaches_scenario() {
    let coordinator = Arc::new(ProfileCoordinator::new(Arc::new(ScriptedGenerator)));
    let mut scenario = Scenario::default();

    let slow = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move { coordinator.generate("slow").await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fast = coordinator.generate("fast").await;

    assert_eq!(scenario.apply_generation(fast), Ok(true));
    assert_eq!(scenario.apply_generation(slow.await.unwrap()), Ok(false));
    assert_eq!(scenario.inputs().avg_job_value, 120.0);
}

// =============================================================================
// Failures and clamping
// =============================================================================

#[tokio::test]
async fn test_upstream_failure_surfaces_user_message() {
    let coordinator = ProfileCoordinator::new(Arc::new(ScriptedGenerator));
    let mut scenario = Scenario::default();

    let outcome = coordinator.generate("boom").await;
    let err = scenario.apply_generation(outcome).unwrap_err();

    assert!(matches!(err, GenerationError::Upstream(_)));
    assert!(err.user_message().starts_with("Failed to generate AI profile"));
    assert_eq!(scenario.inputs().avg_job_value, 200.0);
}

#[tokio::test]
async fn test_malformed_payload() {
    let coordinator = ProfileCoordinator::new(Arc::new(ScriptedGenerator));
    let err = coordinator.generate("garbage").await.unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[tokio::test]
async fn test_patch_is_clamped_to_slider_range() {
    let coordinator = ProfileCoordinator::new(Arc::new(ScriptedGenerator));
    let patch = coordinator.generate("oversized").await.unwrap().unwrap();
    assert_eq!(patch.monthly_bookings, Some(375));
}

#[tokio::test]
async fn test_preset_generator_end_to_end() {
    let coordinator = ProfileCoordinator::new(Arc::new(PresetGenerator::new()));
    let mut scenario = Scenario::default();

    let outcome = coordinator.generate("a small auto detailing shop").await;
    assert_eq!(scenario.apply_generation(outcome), Ok(true));
    assert_eq!(scenario.inputs().avg_job_value, 180.0);
    assert!(scenario.report().gains.total_monthly_gain > 0.0);

    let outcome = coordinator.generate("a quantum computing lab").await;
    assert!(matches!(outcome, Err(GenerationError::NoMatch(_))));
}
