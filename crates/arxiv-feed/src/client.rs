use crate::types::FeedEntry;
use anyhow::{anyhow, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::time::Duration;

const DEFAULT_BASE: &str = "https://export.arxiv.org/api/query";

#[derive(Clone)]
pub struct ArxivClient {
    http: reqwest::Client,
    base: String,
}

impl Default for ArxivClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, Duration::from_secs(20))
    }
}

impl ArxivClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("arxiv-feed/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("reqwest client");
        Self { http, base: base.into() }
    }

    /// Fetch up to `max_results` entries matching `topic`, in feed order.
    /// Transport errors, non-success statuses and non-XML bodies all surface
    /// as `Err`; the caller owns the degradation policy.
    pub async fn search(&self, topic: &str, max_results: usize) -> Result<Vec<FeedEntry>> {
        use reqwest::header::{ACCEPT, CONTENT_TYPE};
        let search_query = build_query(topic);
        let resp = self
            .http
            .get(&self.base)
            .query(&[("search_query", search_query.as_str())])
            .query(&[("start", 0usize), ("max_results", max_results)])
            .header(ACCEPT, "application/atom+xml, application/xml;q=0.9, text/xml;q=0.8")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("arXiv API error: HTTP {}", status));
        }
        let ctype: String = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_default();
        if !(ctype.contains("xml") || ctype.contains("atom")) {
            let snip = resp.text().await.unwrap_or_default();
            let preview: String = snip.trim().chars().take(200).collect();
            return Err(anyhow!("arXiv API unexpected content-type: {} body: {}", ctype, preview));
        }
        let text = resp.text().await?;
        parse_atom_feed(&text)
    }
}

/// arXiv query syntax: `all:term`, with quoting to approximate phrase
/// search for multi-word topics.
fn build_query(topic: &str) -> String {
    let t = topic.trim();
    if t.is_empty() {
        return "all:*".into();
    }
    if t.contains(' ') {
        format!("all:\"{}\"", t.replace('"', ""))
    } else {
        format!("all:{}", t)
    }
}

fn parse_atom_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut out: Vec<FeedEntry> = vec![];

    // The feed carries its own <title> outside any <entry>; everything below
    // only collects text while inside one.
    let mut in_entry = false;
    let mut cur = FeedEntry::default();
    let mut text_target: Option<&'static str> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name_buf: Vec<u8> = e.name().as_ref().to_vec();
                match local_name(&name_buf) {
                    b"entry" => {
                        in_entry = true;
                        cur = FeedEntry::default();
                        text_target = None;
                    }
                    b"title" if in_entry => text_target = Some("title"),
                    b"summary" if in_entry => text_target = Some("summary"),
                    b"published" if in_entry => text_target = Some("published"),
                    b"name" if in_entry => text_target = Some("author"),
                    b"link" if in_entry => collect_link(&e, &mut cur),
                    _ => {}
                }
            }
            // arXiv emits <link .../> self-closed.
            Ok(Event::Empty(e)) => {
                let name_buf: Vec<u8> = e.name().as_ref().to_vec();
                if local_name(&name_buf) == b"link" && in_entry {
                    collect_link(&e, &mut cur);
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(tag) = text_target.take() {
                    let txt = t.unescape().unwrap_or_default().trim().to_string();
                    match tag {
                        "title" => cur.title = txt,
                        "summary" => cur.summary = txt,
                        "published" => cur.published = txt,
                        "author" => cur.authors.push(txt),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name_buf: Vec<u8> = e.name().as_ref().to_vec();
                if local_name(&name_buf) == b"entry" && in_entry {
                    in_entry = false;
                    out.push(std::mem::take(&mut cur));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow!("XML parse error: {}", e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}

fn collect_link(e: &quick_xml::events::BytesStart<'_>, cur: &mut FeedEntry) {
    let mut rel: Option<String> = None;
    let mut href: Option<String> = None;
    for a in e.attributes().flatten() {
        let v = String::from_utf8_lossy(&a.value).to_string();
        match a.key.as_ref() {
            b"rel" => rel = Some(v),
            b"href" => href = Some(v),
            _ => {}
        }
    }
    if rel.as_deref() == Some("alternate") && cur.url.is_empty() {
        if let Some(h) = href {
            cur.url = h;
        }
    }
}

fn local_name(raw: &[u8]) -> &[u8] {
    match raw.iter().position(|b| *b == b':') {
        Some(ix) => &raw[ix + 1..],
        None => raw,
    }
}
