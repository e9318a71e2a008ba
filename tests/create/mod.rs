mod create_pipeline_with_missing_env_fails;
