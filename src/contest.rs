use crate::verdict;

pub struct Problem {
    pub id: String,
    pub name: String,
}

pub struct Team {
    pub id: u32,
    pub name: String,
}

pub struct Submission {
    pub id: u32,
    // indices into the owning contest's problems/teams
    pub problem: usize,
    pub team: usize,
    pub attempt: u32,
    pub time: u32, // in minutes
    pub verdict: Option<&'static str>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.verdict == Some(verdict::ACCEPTED)
    }
}

pub struct Contest {
    pub name: String,
    pub duration: u32, // in minutes
    pub problems: Vec<Problem>,
    pub teams: Vec<Team>,
    pub submissions: Vec<Submission>,
}

impl Default for Contest {
    fn default() -> Contest {
        Contest {
            name: "Unnamed".into(),
            duration: 300,
            problems: Vec::new(),
            teams: Vec::new(),
            submissions: Vec::new(),
        }
    }
}

impl Contest {
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn problem_of(&self, submission: &Submission) -> &Problem {
        &self.problems[submission.problem]
    }

    pub fn team_of(&self, submission: &Submission) -> &Team {
        &self.teams[submission.team]
    }
}
