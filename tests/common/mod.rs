//! Independent replay of a generated script, used to check that every line
//! is legal at the point it appears.

pub struct Dir {
    parent: usize,
    files: Vec<String>,
    dirs: Vec<(String, usize)>,
}

pub struct Replay {
    dirs: Vec<Dir>,
    cwd: usize,
    pub entries: usize,
    pub peak: usize,
    capacity: usize,
    finished: bool,
}

pub fn is_name(s: &str, min: usize, max: usize) -> bool {
    let mut chars = s.chars();
    (min..=max).contains(&s.len())
        && chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

impl Replay {
    pub fn new(capacity: usize) -> Self {
        Self {
            dirs: vec![Dir { parent: 0, files: Vec::new(), dirs: Vec::new() }],
            cwd: 0,
            entries: 0,
            peak: 0,
            capacity,
            finished: false,
        }
    }

    fn is_empty(&self, dir: usize) -> bool {
        self.dirs[dir].files.is_empty() && self.dirs[dir].dirs.is_empty()
    }

    pub fn apply(&mut self, line: &str) -> Result<(), String> {
        if self.finished {
            return Err(format!("line after checkfs: {}", line));
        }
        let parts: Vec<&str> = line.split(' ').collect();
        match parts.as_slice() {
            ["cd", ".."] => {
                if self.cwd == 0 {
                    return Err("cd .. at root".to_string());
                }
                self.cwd = self.dirs[self.cwd].parent;
            }
            ["cd", name] => {
                let target = self.dirs[self.cwd]
                    .dirs
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, id)| *id)
                    .ok_or_else(|| format!("cd into missing directory {}", name))?;
                self.cwd = target;
            }
            ["mkdir", name] => {
                if !is_name(name, 3, 7) {
                    return Err(format!("bad name {}", name));
                }
                if self.entries >= self.capacity {
                    return Err("mkdir over capacity".to_string());
                }
                let id = self.dirs.len();
                self.dirs.push(Dir { parent: self.cwd, files: Vec::new(), dirs: Vec::new() });
                self.dirs[self.cwd].dirs.push((name.to_string(), id));
                self.entries += 1;
            }
            ["touch", name] => {
                if !is_name(name, 3, 7) {
                    return Err(format!("bad name {}", name));
                }
                if self.entries >= self.capacity {
                    return Err("touch over capacity".to_string());
                }
                let files = &mut self.dirs[self.cwd].files;
                if files.iter().any(|f| f == name) {
                    return Err(format!("duplicate file {}", name));
                }
                files.push(name.to_string());
                self.entries += 1;
            }
            ["write", payload, name] => {
                if !(1..=320).contains(&payload.len()) || !payload.bytes().all(|b| b.is_ascii_alphanumeric()) {
                    return Err(format!("bad payload for {}", name));
                }
                if !self.dirs[self.cwd].files.iter().any(|f| f == name) {
                    return Err(format!("write to missing file {}", name));
                }
            }
            ["rm", name] => {
                let cwd = self.cwd;
                if let Some(pos) = self.dirs[cwd].files.iter().position(|f| f == name) {
                    self.dirs[cwd].files.remove(pos);
                } else {
                    let pos = self.dirs[cwd]
                        .dirs
                        .iter()
                        .position(|(n, id)| n == name && self.is_empty(*id))
                        .ok_or_else(|| format!("rm of missing or non-empty {}", name))?;
                    self.dirs[cwd].dirs.remove(pos);
                }
                self.entries -= 1;
            }
            ["checkfs"] => self.finished = true,
            _ => return Err(format!("unparseable line {:?}", line)),
        }
        self.peak = self.peak.max(self.entries);
        Ok(())
    }

    pub fn finished(&self) -> bool {
        self.finished
    }
}
