//! Static lookup tables for categories, social platforms and their hosts

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Game,
    Nft,
    Finance,
    Dao,
    Tool,
    Other,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Game,
        Category::Nft,
        Category::Finance,
        Category::Dao,
        Category::Tool,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Game => "game",
            Category::Nft => "nft",
            Category::Finance => "finance",
            Category::Dao => "dao",
            Category::Tool => "tool",
            Category::Other => "other",
        }
    }

    /// Look up a category by its exact (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    X,
    LinkedIn,
    Threads,
    Mastodon,
    Telegram,
    Discord,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::X,
        Platform::LinkedIn,
        Platform::Threads,
        Platform::Mastodon,
        Platform::Telegram,
        Platform::Discord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::X => "x",
            Platform::LinkedIn => "linkedin",
            Platform::Threads => "threads",
            Platform::Mastodon => "mastodon",
            Platform::Telegram => "telegram",
            Platform::Discord => "discord",
        }
    }

    /// Look up a platform by its exact (case-sensitive) key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    /// Hosts a social URL for this platform may point at
    pub fn allowed_hosts(&self) -> &'static HashSet<&'static str> {
        &PLATFORM_HOSTS[self]
    }

    pub fn allows_host(&self, host: &str) -> bool {
        self.allowed_hosts().contains(host)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const TWITTER_HOSTS: &[&str] = &["twitter.com", "www.twitter.com", "x.com", "www.x.com", "t.co"];

const HOST_TABLE: &[(Platform, &[&str])] = &[
    (
        Platform::Facebook,
        &["facebook.com", "www.facebook.com", "fb.me"],
    ),
    (
        Platform::Instagram,
        &["instagram.com", "www.instagram.com", "instagr.am"],
    ),
    (Platform::Twitter, TWITTER_HOSTS),
    (Platform::X, TWITTER_HOSTS),
    (
        Platform::LinkedIn,
        &["linkedin.com", "www.linkedin.com", "lnkd.in"],
    ),
    (Platform::Threads, &["threads.net", "www.threads.net"]),
    (
        Platform::Mastodon,
        &["mastodon.social", "www.mastodon.social"],
    ),
    (Platform::Telegram, &["t.me", "www.t.me"]),
    (
        Platform::Discord,
        &[
            "discord.com",
            "www.discord.com",
            "discord.gg",
            "www.discord.gg",
        ],
    ),
];

// Built once from HOST_TABLE; every platform has an entry
static PLATFORM_HOSTS: Lazy<HashMap<Platform, HashSet<&'static str>>> = Lazy::new(|| {
    HOST_TABLE
        .iter()
        .map(|(platform, hosts)| (*platform, hosts.iter().copied().collect()))
        .collect()
});
