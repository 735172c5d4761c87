use trending_digest::config::Config;
use trending_digest::mailer::{MailCredentials, API_KEY_VAR, RECIPIENT_VAR, SENDER_VAR};

/// One trending row in the page's current markup
pub fn trending_row(owner: &str, repo: &str, stars: &str, description: &str) -> String {
    format!(
        r#"<article class="Box-row">
  <div class="float-right d-flex"></div>
  <h2 class="h3 lh-condensed">
    <a data-view-component="true" href="/{owner}/{repo}" class="Link">
      <svg aria-hidden="true" class="octicon octicon-repo mr-1 color-fg-muted"></svg>
      <span data-view-component="true" class="text-normal">
        {owner} /
      </span>
      {repo}
    </a>
  </h2>
  <p class="col-9 color-fg-muted my-1 pr-4">
    {description}
  </p>
  <div class="f6 color-fg-muted mt-2">
    <a href="/{owner}/{repo}/stargazers" class="Link Link--muted d-inline-block mr-3">
      <svg aria-label="star" class="octicon octicon-star"></svg>
      {stars}
    </a>
    <a href="/{owner}/{repo}/forks" class="Link Link--muted d-inline-block mr-3">42</a>
  </div>
</article>"#
    )
}

/// A trending page with `count` rows named `owner/repo1..count`
pub fn trending_page(count: usize) -> String {
    let rows: Vec<String> = (1..=count)
        .map(|i| {
            trending_row(
                "owner",
                &format!("repo{i}"),
                &format!("{},000", i),
                &format!("Description {i}"),
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html><html><head><title>Trending</title></head><body><div class=\"Box\">{}</div></body></html>",
        rows.join("\n")
    )
}

/// Configuration pointing both collaborators at a mock server
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.source.url = format!("{}/trending", base_url);
    config.source.timeout_seconds = 5;
    config.retry.backoff_factor = 0.0;
    config.email.api_url = base_url.to_string();
    config.email.timeout_seconds = 5;
    config
}

pub fn credentials(recipients: &str) -> MailCredentials {
    MailCredentials::from_lookup(|name| match name {
        API_KEY_VAR => Some("re_test".to_string()),
        SENDER_VAR => Some("digest@example.com".to_string()),
        RECIPIENT_VAR => Some(recipients.to_string()),
        _ => None,
    })
}
