use crate::{builtin_stages, CampaignError, CampaignSession, Difficulty};

#[test]
fn test_builtin_stages_are_valid() {
    let stages = builtin_stages();
    assert_eq!(stages.len(), 3);
    for stage in &stages {
        stage
            .params
            .validate()
            .unwrap_or_else(|e| panic!("stage {} invalid: {e}", stage.id));
        stage
            .word_mix
            .validate()
            .unwrap_or_else(|e| panic!("stage {} mix invalid: {e}", stage.id));
        assert!(!stage.params.boss.words.is_empty());
    }
    assert_eq!(stages[0].difficulty, Difficulty::Easy);
    assert_eq!(stages[2].difficulty, Difficulty::Hard);
}

#[test]
fn test_only_first_stage_unlocked_initially() {
    let session = CampaignSession::new();
    assert!(session.is_unlocked(0));
    assert!(!session.is_unlocked(1));
}

#[test]
fn test_locked_stage_rejected() {
    let mut session = CampaignSession::new();
    assert_eq!(
        session.select_stage(1, 3),
        Err(CampaignError::StageLocked { index: 1 })
    );
    assert_eq!(session.current_stage, 0);
}

#[test]
fn test_out_of_range_stage_rejected() {
    let mut session = CampaignSession::new();
    assert_eq!(
        session.select_stage(7, 3),
        Err(CampaignError::StageOutOfRange { index: 7, count: 3 })
    );
}

#[test]
fn test_completion_unlocks_next_stage() {
    let mut session = CampaignSession::new();
    session.mark_stage_completed(0, 3);
    assert!(session.is_unlocked(1));
    assert!(!session.is_unlocked(2));
    assert!(session.select_stage(1, 3).is_ok());
    assert_eq!(session.current_stage, 1);
}

#[test]
fn test_completion_clamps_at_last_stage() {
    let mut session = CampaignSession::new();
    session.mark_stage_completed(2, 3);
    assert_eq!(session.unlocked_stage, 2);
    // Out-of-range completion is ignored.
    session.mark_stage_completed(9, 3);
    assert_eq!(session.unlocked_stage, 2);
}

#[test]
fn test_completion_never_relocks() {
    let mut session = CampaignSession::new();
    session.mark_stage_completed(1, 3);
    assert_eq!(session.unlocked_stage, 2);
    session.mark_stage_completed(0, 3);
    assert_eq!(session.unlocked_stage, 2, "re-clearing never locks back");
}

#[test]
fn test_session_json_round_trip() {
    let mut session = CampaignSession::new();
    session.mark_stage_completed(0, 3);
    session.select_stage(1, 3).unwrap();
    session.select_bank("custom");

    let json = session.to_json().unwrap();
    let back = CampaignSession::from_json(&json).unwrap();
    assert_eq!(back, session);
}

#[test]
fn test_reset_restores_defaults() {
    let mut session = CampaignSession::new();
    session.mark_stage_completed(1, 3);
    session.select_bank("custom");
    session.reset();
    assert_eq!(session, CampaignSession::default());
}
