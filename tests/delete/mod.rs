mod delete_nonexistent_pipeline_fails;
mod delete_pipeline_requires_confirmation;
mod delete_pipeline_with_child_pipeline_fails;
