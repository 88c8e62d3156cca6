/// Check if the hidden company-website field was filled in. Bots often fill
/// every field they find; humans never see this one.
pub fn is_spam(company_website: Option<&str>) -> bool {
    company_website.is_some_and(|v| !v.trim().is_empty())
}
