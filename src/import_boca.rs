use crate::contest::{Contest, Problem, Submission, Team};
use crate::verdict::VerdictTable;
use std::collections::HashMap;

mod error {
    use quick_xml::de::DeError;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ImportError {
        #[error(transparent)]
        XmlDecode(#[from] DeError),
        #[error("run {run} refers to unknown team {user}")]
        UnknownTeam { run: u32, user: u32 },
        #[error("run {run} refers to unknown problem {problem}")]
        UnknownProblem { run: u32, problem: u32 },
    }
}

pub use error::ImportError;

mod xml {
    use super::ImportError;
    use quick_xml::de::from_str;
    use serde::Deserialize;

    // One record per BOCA database table; every other column of the dump
    // is ignored. Numeric fields are decoded strictly, so an empty or
    // non-numeric text node fails the import instead of turning into zero.

    #[derive(Deserialize, Debug)]
    pub struct Export {
        #[serde(rename = "CONTESTREC")]
        pub contest: ContestRec,
        #[serde(rename = "PROBLEMREC", default)]
        pub problems: Vec<ProblemRec>,
        #[serde(rename = "USERREC", default)]
        pub users: Vec<UserRec>,
        #[serde(rename = "RUNREC", default)]
        pub runs: Vec<RunRec>,
    }

    #[derive(Deserialize, Debug)]
    pub struct ContestRec {
        pub name: String,
        pub duration: u32, // in seconds
    }

    #[derive(Deserialize, Debug)]
    pub struct ProblemRec {
        pub number: u32,
        pub name: String,
        pub fullname: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct UserRec {
        pub r#type: String,
        pub user: u32,
        pub userfull: String,
    }

    #[derive(Deserialize, Debug)]
    pub struct RunRec {
        pub number: u32,
        pub user: u32,
        pub problem: u32,
        pub rundatediff: u32,
        pub runanswer: u32,
    }

    pub fn decode(document: &str) -> Result<Export, ImportError> {
        let export: Export = from_str(document)?;
        Ok(export)
    }
}

pub fn import_str(document: &str, verdicts: &VerdictTable) -> Result<Contest, ImportError> {
    let export = xml::decode(document)?;
    build_contest(export, verdicts)
}

fn build_contest(export: xml::Export, verdicts: &VerdictTable) -> Result<Contest, ImportError> {
    let mut contest = Contest {
        name: export.contest.name,
        duration: export.contest.duration / 60, // export stores seconds
        ..Contest::default()
    };

    let mut problem_index = HashMap::new();
    for rec in export.problems {
        problem_index.insert(rec.number, contest.problems.len());
        contest.problems.push(Problem {
            id: rec.name,
            name: rec.fullname,
        });
    }

    let mut team_index = HashMap::new();
    for rec in export.users {
        if rec.r#type != "team" {
            continue;
        }
        team_index.insert(rec.user, contest.teams.len());
        contest.teams.push(Team {
            id: rec.user,
            name: rec.userfull,
        });
    }

    let mut attempts: HashMap<(u32, u32), u32> = HashMap::new();
    for rec in export.runs {
        let team = *team_index.get(&rec.user).ok_or(ImportError::UnknownTeam {
            run: rec.number,
            user: rec.user,
        })?;
        let problem = *problem_index
            .get(&rec.problem)
            .ok_or(ImportError::UnknownProblem {
                run: rec.number,
                problem: rec.problem,
            })?;

        let attempt = attempts.entry((rec.user, rec.problem)).or_insert(0);
        *attempt += 1;

        contest.submissions.push(Submission {
            id: rec.number,
            problem,
            team,
            attempt: *attempt,
            time: rec.rundatediff,
            verdict: verdicts.get(rec.runanswer),
        });
    }

    Ok(contest)
}
