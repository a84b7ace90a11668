pub mod placement_env;
