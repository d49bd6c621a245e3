pub mod env_extensions;
