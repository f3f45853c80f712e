use saltpepper::{NoiseError, NoisePlan};

fn main() -> Result<(), NoiseError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    NoisePlan::default().execute()?;
    Ok(())
}
