use egov_core::config::EgovConfig;
use egov_core::constants;

#[test]
fn empty_toml_yields_defaults() {
    let config = EgovConfig::from_toml("").unwrap();
    assert_eq!(config.retrieval.top_k, constants::DEFAULT_TOP_K);
    assert_eq!(config.retrieval.prefilter_size, constants::DEFAULT_PREFILTER_SIZE);
    assert_eq!(config.cache.ttl_secs, constants::DEFAULT_CACHE_TTL_SECS);
    assert_eq!(config.cache.capacity, constants::DEFAULT_CACHE_CAPACITY);
    assert_eq!(config.session.max_turns, constants::DEFAULT_MAX_TURNS);
    assert!((config.retrieval.vector_weight - 0.7).abs() < f32::EPSILON);
    assert!((config.retrieval.lexical_weight - 0.3).abs() < f32::EPSILON);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = EgovConfig::from_toml(
        r#"
        [retrieval]
        top_k = 5
        vector_weight = 0.5
        lexical_weight = 0.5

        [cache]
        ttl_secs = 60
        "#,
    )
    .unwrap();

    assert_eq!(config.retrieval.top_k, 5);
    assert_eq!(config.cache.ttl_secs, 60);
    // Untouched sections keep their defaults.
    assert_eq!(config.cache.capacity, constants::DEFAULT_CACHE_CAPACITY);
    assert_eq!(config.retrieval.prefilter_size, constants::DEFAULT_PREFILTER_SIZE);
}

#[test]
fn effective_candidate_count_scales_with_top_k() {
    let mut config = EgovConfig::default();
    config.retrieval.top_k = 3;
    config.retrieval.candidate_count = 10;
    assert_eq!(config.retrieval.effective_candidate_count(), 15);

    config.retrieval.top_k = 1;
    assert_eq!(config.retrieval.effective_candidate_count(), 10);
}

#[test]
fn zero_top_k_is_rejected() {
    let err = EgovConfig::from_toml("[retrieval]\ntop_k = 0\n").unwrap_err();
    assert!(err.to_string().contains("top_k"));
}

#[test]
fn negative_weight_is_rejected() {
    let err = EgovConfig::from_toml("[retrieval]\nvector_weight = -0.1\n").unwrap_err();
    assert!(err.to_string().contains("weight"));
}

#[test]
fn zero_cache_capacity_is_rejected() {
    let err = EgovConfig::from_toml("[cache]\ncapacity = 0\n").unwrap_err();
    assert!(err.to_string().contains("capacity"));
}
