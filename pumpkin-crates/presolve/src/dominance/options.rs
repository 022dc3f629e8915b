/// Options for the detection and exploitation of dominance relations.
///
/// The cropping limits trade completeness for bounded work: they never make a reported relation
/// unsound, they only cause some relations to be missed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct DominanceOptions {
    /// The maximum number of candidates kept for a single signed variable when the candidate
    /// lists are first built.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dominance-max-initial-candidates", default_value_t = 50)
    )]
    pub max_initial_candidates: usize,
    /// The number of elements of a large partition part which are scanned for candidates.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dominance-max-part-scan", default_value_t = 200)
    )]
    pub max_part_scan: usize,
    /// Candidates which appear together in a single constraint are only recorded while the
    /// constraint has at most this many entries in one partition part.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dominance-max-stored-group", default_value_t = 1000)
    )]
    pub max_stored_group: usize,
    /// At-most-one and exactly-one constraints with more literals are skipped when fixing
    /// dominated literals within a constraint.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dominance-max-literals-in-constraint", default_value_t = 10)
    )]
    pub max_literals_for_in_constraint_fixing: usize,
    /// Whether to fix and tighten variables based on the locks of the constraints.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dual-bound-strengthening", default_value_t = true, action = clap::ArgAction::Set)
    )]
    pub dual_bound_strengthening: bool,
    /// Whether to detect dominance relations and reduce the model with them.
    #[cfg_attr(
        feature = "clap",
        arg(long = "exploit-dominance", default_value_t = true, action = clap::ArgAction::Set)
    )]
    pub exploit_dominance: bool,
    /// Whether to add `dominated -> dominating` implications between Boolean variables.
    #[cfg_attr(
        feature = "clap",
        arg(long = "dominance-implications", default_value_t = true, action = clap::ArgAction::Set)
    )]
    pub add_implications: bool,
}

impl Default for DominanceOptions {
    fn default() -> Self {
        Self {
            max_initial_candidates: 50,
            max_part_scan: 200,
            max_stored_group: 1000,
            max_literals_for_in_constraint_fixing: 10,
            dual_bound_strengthening: true,
            exploit_dominance: true,
            add_implications: true,
        }
    }
}
