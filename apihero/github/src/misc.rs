//! Stand-alone informational endpoints: rate limits, API metadata, emojis,
//! Markdown rendering, licenses, codes of conduct and gitignore templates.
//!
//! Unlike the other modules, descriptors here span several resources, so
//! their ids do not share a single prefix.

use apihero_define::{
    ApiHeroEndpoint, EndpointMeta, LinkHeader, RawText, RestMethod, endpoint_input,
};

use crate::endpoint;
use crate::types::{
    ApiOverview, CodeOfConduct, Emojis, GitignoreTemplate, License, LicenseContent,
    LicenseSimple, RateLimitOverview,
};

// =============================================================================
// Inputs
// =============================================================================

endpoint_input! {
    #[derive(Default)]
    pub struct OctocatInput {
        query {
            /// Words for the speech bubble.
            s: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RenderMarkdownInput {
        body {
            text: String,
            /// `markdown` or `gfm`.
            mode: Option<String>,
            /// `owner/repo` used to resolve references in `gfm` mode.
            context: Option<String>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ListLicensesInput {
        query {
            featured: Option<bool>,
            per_page: Option<u32>,
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct LicenseInput {
        path { license: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct RepoLicenseInput {
        path { owner: String, repo: String }
        query { git_ref as "ref": Option<String> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct ConductCodeInput {
        path { key: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct GitignoreTemplateInput {
        path { name: String }
    }
}

// =============================================================================
// Rate limit and meta
// =============================================================================

/// Get rate-limit status for the caller. Does not count against the limit.
pub const RATE_LIMIT_GET: ApiHeroEndpoint<(), RateLimitOverview> =
    endpoint("rateLimit/get", RestMethod::Get, "/rate_limit");

/// Get the hypermedia links of the API root.
pub const META_ROOT: ApiHeroEndpoint<(), serde_json::Value> =
    endpoint("meta/root", RestMethod::Get, "/");

/// Get GitHub's IP ranges and SSH key fingerprints.
pub const META_GET: ApiHeroEndpoint<(), ApiOverview> =
    endpoint("meta/get", RestMethod::Get, "/meta");

/// Get the octocat as ASCII art.
pub const META_GET_OCTOCAT: ApiHeroEndpoint<OctocatInput, RawText> =
    endpoint("meta/getOctocat", RestMethod::Get, "/octocat");

/// Get a random sentence from the Zen of GitHub.
pub const META_GET_ZEN: ApiHeroEndpoint<(), RawText> =
    endpoint("meta/getZen", RestMethod::Get, "/zen");

/// List every emoji available for use on GitHub.
pub const EMOJIS_GET: ApiHeroEndpoint<(), Emojis> =
    endpoint("emojis/get", RestMethod::Get, "/emojis");

/// Render a Markdown document to HTML.
pub const MARKDOWN_RENDER: ApiHeroEndpoint<RenderMarkdownInput, RawText> =
    endpoint("markdown/render", RestMethod::Post, "/markdown");

// =============================================================================
// Licenses, codes of conduct and gitignore templates
// =============================================================================

/// List commonly used licenses.
pub const LICENSES_GET_ALL_COMMONLY_USED: ApiHeroEndpoint<
    ListLicensesInput,
    Vec<LicenseSimple>,
    LinkHeader,
> = endpoint("licenses/getAllCommonlyUsed", RestMethod::Get, "/licenses");

/// Get a license by its key.
pub const LICENSES_GET: ApiHeroEndpoint<LicenseInput, License> =
    endpoint("licenses/get", RestMethod::Get, "/licenses/{license}");

/// Get the license file of a repository, if one is detected.
pub const LICENSES_GET_FOR_REPO: ApiHeroEndpoint<RepoLicenseInput, LicenseContent> =
    endpoint("licenses/getForRepo", RestMethod::Get, "/repos/{owner}/{repo}/license");

/// List all codes of conduct.
pub const CODES_OF_CONDUCT_GET_ALL: ApiHeroEndpoint<(), Vec<CodeOfConduct>> = endpoint(
    "codesOfConduct/getAllCodesOfConduct",
    RestMethod::Get,
    "/codes_of_conduct",
);

/// Get a code of conduct.
pub const CODES_OF_CONDUCT_GET: ApiHeroEndpoint<ConductCodeInput, CodeOfConduct> = endpoint(
    "codesOfConduct/getConductCode",
    RestMethod::Get,
    "/codes_of_conduct/{key}",
);

/// List names of all gitignore templates.
pub const GITIGNORE_GET_ALL_TEMPLATES: ApiHeroEndpoint<(), Vec<String>> =
    endpoint("gitignore/getAllTemplates", RestMethod::Get, "/gitignore/templates");

/// Get a gitignore template.
pub const GITIGNORE_GET_TEMPLATE: ApiHeroEndpoint<GitignoreTemplateInput, GitignoreTemplate> =
    endpoint("gitignore/getTemplate", RestMethod::Get, "/gitignore/templates/{name}");

/// Metadata of every descriptor in this module.
pub fn endpoints() -> Vec<EndpointMeta> {
    vec![
        RATE_LIMIT_GET.meta(),
        META_ROOT.meta(),
        META_GET.meta(),
        META_GET_OCTOCAT.meta(),
        META_GET_ZEN.meta(),
        EMOJIS_GET.meta(),
        MARKDOWN_RENDER.meta(),
        LICENSES_GET_ALL_COMMONLY_USED.meta(),
        LICENSES_GET.meta(),
        LICENSES_GET_FOR_REPO.meta(),
        CODES_OF_CONDUCT_GET_ALL.meta(),
        CODES_OF_CONDUCT_GET.meta(),
        GITIGNORE_GET_ALL_TEMPLATES.meta(),
        GITIGNORE_GET_TEMPLATE.meta(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_spans_several_resources() {
        let all = endpoints();
        assert_eq!(all.len(), 14);

        let mut resources: Vec<_> = all.iter().map(EndpointMeta::resource).collect();
        resources.dedup();
        assert_eq!(
            resources,
            vec![
                "rateLimit",
                "meta",
                "emojis",
                "markdown",
                "licenses",
                "codesOfConduct",
                "gitignore",
            ]
        );
    }

    #[test]
    fn text_responses_use_raw_text() {
        assert!(META_GET_ZEN.meta().output_type.ends_with("RawText"));
        assert!(MARKDOWN_RENDER.meta().output_type.ends_with("RawText"));
        assert!(META_GET.meta().output_type.ends_with("ApiOverview"));
    }

    #[test]
    fn markdown_render_posts_a_body() {
        let meta = MARKDOWN_RENDER.meta();
        assert_eq!(meta.method, RestMethod::Post);
        assert_eq!(meta.body_params, &["text", "mode", "context"]);

        let request = MARKDOWN_RENDER
            .prepare(&RenderMarkdownInput {
                text: "Hello **world**".into(),
                mode: Some("gfm".into()),
                context: Some("octo-org/octo-repo".into()),
            })
            .unwrap();
        assert_eq!(request.body.unwrap()["mode"], "gfm");
    }

    #[test]
    fn unit_input_endpoints_prepare_bare_paths() {
        assert_eq!(RATE_LIMIT_GET.prepare(&()).unwrap().path, "/rate_limit");
        assert_eq!(META_ROOT.prepare(&()).unwrap().path, "/");
    }
}
