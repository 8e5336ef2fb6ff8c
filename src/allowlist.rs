//! Allow-list of translation keys used by Piwik Mobile.
//!
//! Piwik ships thousands of translation strings; the mobile client only needs
//! the ones listed here. The table pairs each key with its English default,
//! but the exporter only uses key membership.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Translation keys recognised by the mobile client, with their English defaults.
pub const TRANSLATION_KEYS: &[(&str, &str)] = &[
    ("CorePluginsAdmin_Activate", "Activate"),
    ("CorePluginsAdmin_Deactivate", "Deactivate"),
    ("CoreHome_PeriodDay", "Day"),
    ("CoreHome_PeriodWeek", "Week"),
    ("CoreHome_PeriodMonth", "Month"),
    ("CoreHome_PeriodYear", "Year"),
    ("CoreHome_PeriodDays", "days"),
    ("CoreHome_PeriodWeeks", "weeks"),
    ("CoreHome_PeriodMonths", "months"),
    ("CoreHome_PeriodYears", "years"),
    ("CoreHome_TableNoData", "No data for this table."),
    ("CoreUpdater_UpdateTitle", "Update"),
    ("CustomVariables_CustomVariables", "Custom Variables"),
    ("Feedback_DoYouHaveBugReportOrFeatureRequest", "Do you have a bug to report or a feature request?"),
    ("Feedback_ThankYou", "Thank you for helping us to make Piwik better!"),
    ("General_AboutPiwikX", "About Piwik %s"),
    ("General_Error", "Error"),
    ("General_Details", "Details"),
    ("General_Done", "Done"),
    ("General_Ok", "Ok"),
    ("General_Settings", "Settings"),
    ("General_Save", "Save"),
    ("General_ExceptionPrivilegeAtLeastOneWebsite", "You can't access this resource as it requires an %s access for at least one website."),
    ("General_Close", "Close"),
    ("General_ColumnNbVisits", "Visits"),
    ("General_ColumnPageviews", "Pageviews"),
    ("General_CurrentWeek", "Current Week"),
    ("General_CurrentMonth", "Current Month"),
    ("General_CurrentYear", "Current Year"),
    ("General_Delete", "Delete"),
    ("General_Edit", "Edit"),
    ("General_ErrorRequest", "Oops... problem during the request, please try again."),
    ("General_ForExampleShort", "eg."),
    ("General_FromReferrer", "From"),
    ("General_GiveUsYourFeedback", "Give us Feedback!"),
    ("General_LoadingData", "Loading data..."),
    ("General_LongMonth_1", "January"),
    ("General_LongMonth_2", "February"),
    ("General_LongMonth_3", "March"),
    ("General_LongMonth_4", "April"),
    ("General_LongMonth_5", "May"),
    ("General_LongMonth_6", "June"),
    ("General_LongMonth_7", "July"),
    ("General_LongMonth_8", "August"),
    ("General_LongMonth_9", "September"),
    ("General_LongMonth_10", "October"),
    ("General_LongMonth_11", "November"),
    ("General_LongMonth_12", "December"),
    ("General_NewVisitor", "New Visitor"),
    ("General_Next", "Next"),
    ("General_No", "No"),
    ("General_NoDataForGraph", "No data for this graph."),
    ("General_NotValid", "%s is not valid"),
    ("General_NumberOfVisits", "Number of visits"),
    ("General_Others", "Others"),
    ("General_PiwikXIsAvailablePleaseNotifyPiwikAdmin", "%s is available. Please notify the site administrator."),
    ("General_Previous", "Previous"),
    ("General_Reports", "Reports"),
    ("General_Required", "%s required"),
    ("General_GeneralSettings", "General Settings"),
    ("General_Subtotal", "Subtotal"),
    ("General_Today", "Today"),
    ("General_Unknown", "Unknown"),
    ("General_Value", "Value"),
    ("General_VisitConvertedNGoals", "Visit converted %s Goals"),
    ("General_VisitorIP", "Visitor IP"),
    ("General_Visitors", "Visitors"),
    ("General_VisitType", "Visitor type"),
    ("General_Yes", "Yes"),
    ("General_Yesterday", "Yesterday"),
    ("General_YourChangesHaveBeenSaved", "Your changes have been saved."),
    ("Goals_AbandonedCart", "Abandoned Cart"),
    ("Goals_Ecommerce", "Abandoned"),
    ("Goals_EcommerceOrder", "Ecommerce order"),
    ("Live_GoalRevenue", "Revenue"),
    ("Live_LastHours", "Last %s hours"),
    ("Live_LastMinutes", "Last %s minutes"),
    ("Live_VisitorsInRealTime", "Visitors in Real Time"),
    ("Live_VisitorLog", "Visitor Log"),
    ("Login_Login", "Username"),
    ("Login_Password", "Password"),
    ("SEO_Rank", "Rank"),
    ("SitesManager_Cancel_js", "Cancel"),
    ("SitesManager_ExceptionInvalidUrl", "The url '%s' is not a valid URL."),
    ("UserCountry_Country", "Country"),
    ("UsersManager_ManageAccess", "Manage access"),
    ("UsersManager_PrivView", "View"),
    ("UserSettings_ColumnBrowser", "Browser"),
    ("UserSettings_Plugins", "Plugins"),
    ("UserSettings_ColumnResolution", "Resolution"),
    ("UserSettings_VisitorSettings", "Visitor Settings"),
    ("VisitsSummary_NbVisits", "%s visits"),
    ("VisitsSummary_EvolutionOverLastPeriods", "Evolution over the last %s"),
    ("VisitsSummary_NbActions", "%s actions"),
    ("General_InvalidResponse", "The received data is invalid."),
    ("General_ChooseLanguage", "Choose language"),
    ("General_ChoosePeriod", "Choose period"),
    ("General_ChooseWebsite", "Choose website"),
    ("General_ChooseDate", "Choose date"),
    ("General_Language", "Language"),
    ("General_PleaseUpdatePiwik", "Please update your Piwik"),
    ("General_RequestTimedOut", "A data request to %s timed out. Please try again."),
    ("General_Outlink", "Outlink"),
    ("General_Download", "Download"),
    ("General_Goal", "Goal"),
    ("General_Help", "Help"),
    ("General_Visitor", "Visitor"),
    ("Mobile_AddAccount", "Add account"),
    ("Mobile_Advanced", "Advanced"),
    ("Mobile_AnonymousAccess", "Anonymous access"),
    ("Mobile_AnonymousTracking", "Anonymous tracking"),
    ("Mobile_AccessUrlLabel", "Piwik Access Url"),
    ("Mobile_AskForAnonymousTrackingPermission", "When enabled, Piwik Mobile will send anonymous usage data to piwik.org. The intent is to use this data to help Piwik Mobile developers better understand how the app is used. Information sent is: menus and settings clicked on, OS name and version, any error displayed in Piwik Mobile. We will NOT track any of your analytics data. This anonymous data will never be made public. You can disable/enable anonymous tracking in Settings at any time."),
    ("Mobile_ChooseHttpTimeout", "Choose HTTP timeout value"),
    ("Mobile_DefaultReportDate", "Report date"),
    ("Mobile_EnableGraphsLabel", "Display graphs"),
    ("Mobile_HelpUsToImprovePiwikMobile", "Would you like to enable anonymous usage tracking in Piwik Mobile?"),
    ("Mobile_HttpIsNotSecureWarning", "Your Piwik authorization token (token_auth) is sent in clear text if you use 'HTTP'. For this reason we recommend HTTPS for secure transport of data over the internet. Do you want to proceed?"),
    ("Mobile_LastUpdated", "Last Updated: %s"),
    ("Mobile_MultiChartLabel", "Display sparklines"),
    ("Mobile_MultiChartInfo", "Next to each website on the welcome screen"),
    ("Mobile_NavigationBack", "Back"),
    ("Mobile_NetworkNotReachable", "Network not reachable"),
    ("Mobile_PullDownToRefresh", "Pull down to refresh..."),
    ("Mobile_Refresh", "Refresh"),
    ("Mobile_Reloading", "Reloading..."),
    ("Mobile_ReleaseToRefresh", "Release to refresh..."),
    ("Mobile_SaveSuccessError", "Please verify settings"),
    ("Mobile_SearchWebsite", "Search websites"),
    ("Mobile_ShowAll", "Show all"),
    ("Mobile_ShowLess", "Show less"),
    ("Mobile_HttpTimeout", "HTTP Timeout"),
    ("Mobile_HttpTimeoutInfo", "Increase if you receive timeout errors"),
    ("Mobile_VerifyAccount", "Verifying Account"),
    ("Mobile_YouAreOffline", "Sorry, you are currently offline"),
];

/// Immutable lookup over [`TRANSLATION_KEYS`].
#[derive(Debug)]
pub struct AllowList {
    defaults: HashMap<&'static str, &'static str>,
}

static ALLOW_LIST: OnceLock<AllowList> = OnceLock::new();

impl AllowList {
    /// Get the global allow-list, building it on first access.
    pub fn get() -> &'static AllowList {
        ALLOW_LIST.get_or_init(|| AllowList::from_entries(TRANSLATION_KEYS))
    }

    /// Build an allow-list from explicit entries. Later entries win on duplicate keys.
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> AllowList {
        AllowList {
            defaults: entries.iter().copied().collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    /// English default shown by the client when a language lacks the key.
    pub fn default_value(&self, key: &str) -> Option<&'static str> {
        self.defaults.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.defaults.keys().copied()
    }
}
