// Env values used by basic services.
pub const AKAMAI_CCU_USERNAME: &str = "AKAMAI_CCU_USERNAME";
pub const AKAMAI_CCU_PASSWORD: &str = "AKAMAI_CCU_PASSWORD";
