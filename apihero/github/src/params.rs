//! Inputs shared by many operations.
//!
//! Operations whose only parameters are the owning repository, user or
//! organization (optionally with page controls) use these instead of a
//! dedicated input type.

use apihero_define::endpoint_input;

endpoint_input! {
    /// Page controls for listings with no other parameters.
    #[derive(Default)]
    pub struct PageInput {
        query {
            /// Results per page (max 100).
            per_page: Option<u32>,
            /// Page number, starting at 1.
            page: Option<u32>,
        }
    }
}

endpoint_input! {
    /// Identifies a repository.
    #[derive(Default)]
    pub struct RepoInput {
        path { owner: String, repo: String }
    }
}

endpoint_input! {
    /// A repository listing with page controls.
    #[derive(Default)]
    pub struct RepoPageInput {
        path { owner: String, repo: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UserInput {
        path { username: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct UserPageInput {
        path { username: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct OrgInput {
        path { org: String }
    }
}

endpoint_input! {
    #[derive(Default)]
    pub struct OrgPageInput {
        path { org: String }
        query { per_page: Option<u32>, page: Option<u32> }
    }
}

endpoint_input! {
    /// Identifies a user within an organization.
    #[derive(Default)]
    pub struct OrgUserInput {
        path { org: String, username: String }
    }
}

impl RepoInput {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl RepoPageInput {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}
