// src/application/dto/pagination.rs
use super::content::ContentDto;
use crate::domain::pagination::{NavControl, PageLink, PageLinkModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLinkDto {
    Page { number: u32, is_current: bool },
    Ellipsis,
}

impl From<PageLink> for PageLinkDto {
    fn from(link: PageLink) -> Self {
        match link {
            PageLink::Page { number, is_current } => Self::Page { number, is_current },
            PageLink::Ellipsis => Self::Ellipsis,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NavControlDto {
    pub target: u32,
    pub disabled: bool,
}

impl From<NavControl> for NavControlDto {
    fn from(control: NavControl) -> Self {
        Self {
            target: control.target,
            disabled: control.disabled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PageLinksDto {
    pub previous: NavControlDto,
    pub entries: Vec<PageLinkDto>,
    pub next: NavControlDto,
}

impl From<PageLinkModel> for PageLinksDto {
    fn from(model: PageLinkModel) -> Self {
        Self {
            previous: model.previous.into(),
            entries: model.entries.into_iter().map(Into::into).collect(),
            next: model.next.into(),
        }
    }
}

/// 1-based ranks of the first and last item on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ShowingRangeDto {
    pub from: u64,
    pub to: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentPageDto {
    pub items: Vec<ContentDto>,
    pub search: String,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showing: Option<ShowingRangeDto>,
    pub links: PageLinksDto,
}
