//! The feature glossary: for every feature, the human-readable label of each of its values and
//! the short code that stands for it in the data.
//!
//! A `Glossary` is configuration for the interview, loaded once and passed explicitly. The model
//! never consults it; it only ever sees codes.

use crate::util::{MorelError, Result};

use bidir_map::BidirMap;
use indexmap::IndexMap;
use itertools::Itertools;


/// The features of the agaricus-lepiota mushroom dataset, in ```label=code``` notation.
pub const MUSHROOM_FEATURES: &[(&str, &str)] = &[
    ("cap-shape",                "bell=b,conical=c,convex=x,flat=f,knobbed=k,sunken=s"),
    ("cap-surface",              "fibrous=f,grooves=g,scaly=y,smooth=s"),
    ("cap-color",                "brown=n,buff=b,cinnamon=c,gray=g,green=r,pink=p,purple=u,red=e,white=w,yellow=y"),
    ("bruises",                  "bruises=t,no=f"),
    ("odor",                     "almond=a,anise=l,creosote=c,fishy=y,foul=f,musty=m,none=n,pungent=p,spicy=s"),
    ("gill-attachment",          "attached=a,descending=d,free=f,notched=n"),
    ("gill-spacing",             "close=c,crowded=w,distant=d"),
    ("gill-size",                "broad=b,narrow=n"),
    ("gill-color",               "black=k,brown=n,buff=b,chocolate=h,gray=g,green=r,orange=o,pink=p,purple=u,red=e,white=w,yellow=y"),
    ("stalk-shape",              "enlarging=e,tapering=t"),
    ("stalk-root",               "bulbous=b,club=c,cup=u,equal=e,rhizomorphs=z,rooted=r,missing=?"),
    ("stalk-surface-above-ring", "fibrous=f,scaly=y,silky=k,smooth=s"),
    ("stalk-surface-below-ring", "fibrous=f,scaly=y,silky=k,smooth=s"),
    ("stalk-color-above-ring",   "brown=n,buff=b,cinnamon=c,gray=g,orange=o,pink=p,red=e,white=w,yellow=y"),
    ("stalk-color-below-ring",   "brown=n,buff=b,cinnamon=c,gray=g,orange=o,pink=p,red=e,white=w,yellow=y"),
    ("veil-type",                "partial=p,universal=u"),
    ("veil-color",               "brown=n,orange=o,white=w,yellow=y"),
    ("ring-number",              "none=n,one=o,two=t"),
    ("ring-type",                "cobwebby=c,evanescent=e,flaring=f,large=l,none=n,pendant=p,sheathing=s,zone=z"),
    ("spore-print-color",        "black=k,brown=n,buff=b,chocolate=h,green=r,orange=o,purple=u,white=w,yellow=y"),
    ("population",               "abundant=a,clustered=c,numerous=n,scattered=s,several=v,solitary=y"),
    ("habitat",                  "grasses=g,leaves=l,meadows=m,paths=p,urban=u,waste=w,woods=d"),
];


/// The legal values of one feature
pub struct FeatureValues {

    /// ```label <-> code```
    map: BidirMap<String, String>,

    /// The labels, in the order they were listed
    labels: Vec<String>

}

impl FeatureValues {

    /// Parse ```label=code,label=code,...```
    fn parse(feature: &str, notation: &str) -> Result<Self> {
        let mut map = BidirMap::new();
        let mut labels = Vec::new();

        for entry in notation.split(',') {
            let (label, code) = match entry.split('=').map(str::trim).collect_tuple() {
                Some((l, c)) if ! l.is_empty() && ! c.is_empty() => (String::from(l), String::from(c)),
                _ => {
                    return Err(MorelError::General(format!(
                        "Malformed glossary entry for {}: {:?}", feature, entry
                    )));
                }
            };

            if map.get_by_first(&label).is_some() || map.get_by_second(&code).is_some() {
                return Err(MorelError::General(format!(
                    "Repeated glossary entry for {}: {:?}", feature, entry
                )));
            }

            labels.push(label.clone());
            map.insert(label, code);
        }

        Ok(FeatureValues { map, labels })
    }

    /// The code for a label
    pub fn code(&self, label: &str) -> Option<&str> {
        self.map.get_by_first(&String::from(label)).map(|s| s.as_str())
    }

    /// The label for a code
    pub fn label(&self, code: &str) -> Option<&str> {
        self.map.get_by_second(&String::from(code)).map(|s| s.as_str())
    }

    /// Iterate the ```(label, code)``` pairs in listing order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().filter_map(move |l| self.code(l).map(|c| (l.as_str(), c)))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}


/// Every feature with its legal values.
pub struct Glossary {
    features: IndexMap<String, FeatureValues>
}

impl Glossary {

    /// Build a `Glossary` from ```(feature, "label=code,...")``` pairs. Features are kept in
    /// sorted order.
    ///
    /// # Errors
    /// * `MorelError::General`, if an entry is malformed or repeated
    /// * `MorelError::DuplicateVariable`, if a feature is listed twice
    pub fn parse(entries: &[(&str, &str)]) -> Result<Self> {
        let mut features = IndexMap::new();
        for &(feature, notation) in entries.iter().sorted_by_key(|&&(f, _)| f) {
            if features.contains_key(feature) {
                return Err(MorelError::DuplicateVariable(String::from(feature)));
            }
            features.insert(String::from(feature), FeatureValues::parse(feature, notation)?);
        }

        Ok(Glossary { features })
    }

    /// The glossary of the mushroom dataset
    pub fn mushroom() -> Result<Self> {
        Glossary::parse(MUSHROOM_FEATURES)
    }

    /// The feature names, sorted
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(|s| s.as_str())
    }

    /// Check if `feature` is in the glossary
    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains_key(feature)
    }

    /// The legal values of `feature`
    pub fn values(&self, feature: &str) -> Option<&FeatureValues> {
        self.features.get(feature)
    }

    /// The code for the value labelled `label` of `feature`
    pub fn code(&self, feature: &str, label: &str) -> Option<&str> {
        self.values(feature).and_then(|v| v.code(label))
    }

    /// The label of the value coded `code` of `feature`
    pub fn label(&self, feature: &str, code: &str) -> Option<&str> {
        self.values(feature).and_then(|v| v.label(code))
    }

    /// Check if `code` is a legal value of `feature`
    pub fn is_valid_code(&self, feature: &str, code: &str) -> bool {
        self.label(feature, code).is_some()
    }
}
