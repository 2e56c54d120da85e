use minijinja::Environment;

/// Page templates compiled into the binary.
const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("speaking.html", include_str!("../../templates/speaking.html")),
    ("writing.html", include_str!("../../templates/writing.html")),
    ("listening.html", include_str!("../../templates/listening.html")),
    ("reading.html", include_str!("../../templates/reading.html")),
];

/// Builds the template environment. `.html` names are auto-escaped.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}
