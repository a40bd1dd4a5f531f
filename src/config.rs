use std::path::PathBuf;

/// Startup configuration, read from the environment once in main.
#[derive(Debug)]
pub struct ServiceConfig {
    pub model_path: PathBuf,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let model_path = std::env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| resolve_model_path());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        Self { model_path, port }
    }
}

fn resolve_model_path() -> PathBuf {
    // Common run path: repo root, with the artifact under model/.
    let candidates = [
        PathBuf::from("model/co2_model.json"),
        PathBuf::from("./model/co2_model.json"),
        {
            let mut p = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
            p.pop(); // exe dir
            p.push("model/co2_model.json");
            p
        },
    ];

    for c in candidates {
        if c.exists() {
            return c;
        }
    }

    // Fallback to the default relative path; load() will error
    PathBuf::from("model/co2_model.json")
}
