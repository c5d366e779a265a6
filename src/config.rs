use std::env::VarError;

const ERR_DATABASE_URL: &str = "DATABASE_URL is missing";

pub struct Config {
    pub database_url: String,
}

pub fn load_from_env<F>(env_var_fn: F) -> Config
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let database_url = env_var_fn("DATABASE_URL").expect(ERR_DATABASE_URL);
    Config { database_url }
}
