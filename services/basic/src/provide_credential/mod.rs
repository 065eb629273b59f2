mod default;
pub use default::DefaultCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod static_;
pub use static_::StaticCredentialProvider;
