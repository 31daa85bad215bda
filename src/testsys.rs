use crate::contest::{Contest, Problem, Submission, Team};
use std::io;
use std::io::Write;

pub struct TestsysWriter<W: Write> {
    f: W,
}

impl<W: Write> TestsysWriter<W> {
    pub fn new(f: W) -> TestsysWriter<W> {
        TestsysWriter { f }
    }

    pub fn output(&mut self, contest: &Contest) -> io::Result<()> {
        // Testsys readers take the SUB byte as a structural marker
        writeln!(self.f, "\x1A")?;
        writeln!(self.f, "@contest \"{}\"", contest.name)?;
        writeln!(self.f, "@contlen {}", contest.duration)?;
        writeln!(self.f, "@problems {}", contest.problem_count())?;
        writeln!(self.f, "@teams {}", contest.team_count())?;
        writeln!(self.f, "@submissions {}", contest.submission_count())?;

        for problem in &contest.problems {
            self.output_problem(problem)?;
        }
        for team in &contest.teams {
            self.output_team(team)?;
        }
        for submission in &contest.submissions {
            self.output_submission(contest, submission)?;
        }

        self.f.flush()
    }

    fn output_problem(&mut self, problem: &Problem) -> io::Result<()> {
        // 20,0 is the fixed color/weight placeholder pair the format wants
        writeln!(self.f, "@p {},\"{}\",20,0", problem.id, problem.name)
    }

    fn output_team(&mut self, team: &Team) -> io::Result<()> {
        // 0,1 is the fixed site/status placeholder pair
        writeln!(self.f, "@t {},0,1,\"{}\"", team.id, team.name)
    }

    fn output_submission(&mut self, contest: &Contest, submission: &Submission) -> io::Result<()> {
        writeln!(
            self.f,
            "@s {},{},{},{},{}",
            contest.team_of(submission).id,
            contest.problem_of(submission).id,
            submission.attempt,
            submission.time,
            submission.verdict.unwrap_or("")
        )
    }
}
