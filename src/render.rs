use crate::dom::Element;
use crate::types::RepoRecord;

pub const REPO_NAME_CLASS: &str = "repo-name";
pub const REPO_DESC_CLASS: &str = "repo-desc";

/// Build the list entry for one repository.
///
/// The link opens in a new browsing context and leaks neither the opener nor
/// the referrer. The description paragraph is only emitted when there is text
/// to show.
pub fn render_repo(repo: &RepoRecord) -> Element {
    let link = Element::new("a")
        .attr("class", REPO_NAME_CLASS)
        .attr("href", repo.html_url.as_str())
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(repo.name.as_str());

    let mut item = Element::new("li").child(link);

    if let Some(description) = repo.display_description() {
        item.append_child(
            Element::new("p")
                .attr("class", REPO_DESC_CLASS)
                .text(description),
        );
    }

    item
}

pub fn render_repos(repos: &[RepoRecord]) -> Vec<Element> {
    repos.iter().map(render_repo).collect()
}
