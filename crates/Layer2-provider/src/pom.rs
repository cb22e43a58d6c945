//! pom.xml descriptor parser
//!
//! `<project>` 바로 아래의 `name`, `groupId`, `artifactId`, `version`과
//! `<parent>` 안의 `groupId`, `artifactId`, `version`만 읽습니다.
//!
//! - 요소가 없으면 `None`, 있지만 비어 있으면 `Some("")`
//! - 값은 앞뒤 공백을 제거합니다
//! - `<project>` 이후에 문법 오류가 나면 그때까지 읽은 값으로 결과를 만듭니다
//! - 루트가 `<project>`가 아니거나 XML이 아니면 `None`

use quick_xml::events::Event;
use quick_xml::Reader;
use reportcard_foundation::{ParentCoordinates, ProjectDescriptor};
use tracing::debug;

const PROJECT: &[u8] = b"project";
const PARENT: &[u8] = b"parent";

/// pom.xml 본문을 descriptor로 변환
pub fn parse_pom(content: &str) -> Option<ProjectDescriptor> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut state = PomState::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if !state.open(e.local_name().as_ref()) {
                    return None;
                }
            }
            Ok(Event::Empty(e)) => {
                if !state.open(e.local_name().as_ref()) {
                    return None;
                }
                state.close();
            }
            Ok(Event::End(_)) => state.close(),
            Ok(Event::Text(t)) => {
                let text = match t.unescape() {
                    Ok(text) => text.into_owned(),
                    Err(_) => String::from_utf8_lossy(&t).into_owned(),
                };
                state.text(&text);
            }
            Ok(Event::CData(c)) => state.text(&String::from_utf8_lossy(&c)),
            Ok(Event::Eof) => break,
            Err(e) => {
                debug!(
                    "pom.xml parse error at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                if state.seen_project {
                    break;
                }
                return None;
            }
            _ => {}
        }
        buf.clear();
    }

    state.finish()
}

// ============================================================================
// Parser State
// ============================================================================

/// 값을 받는 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    GroupId,
    ArtifactId,
    Version,
    ParentGroupId,
    ParentArtifactId,
    ParentVersion,
}

impl Slot {
    fn project_field(name: &[u8]) -> Option<Self> {
        match name {
            b"name" => Some(Slot::Name),
            b"groupId" => Some(Slot::GroupId),
            b"artifactId" => Some(Slot::ArtifactId),
            b"version" => Some(Slot::Version),
            _ => None,
        }
    }

    fn parent_field(name: &[u8]) -> Option<Self> {
        match name {
            b"groupId" => Some(Slot::ParentGroupId),
            b"artifactId" => Some(Slot::ParentArtifactId),
            b"version" => Some(Slot::ParentVersion),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct PomState {
    depth: usize,
    seen_project: bool,
    in_parent: bool,
    /// (slot, 요소 깊이)
    current: Option<(Slot, usize)>,
    text: String,
    descriptor: ProjectDescriptor,
}

impl PomState {
    /// 요소 시작. 루트가 `<project>`가 아니면 false
    fn open(&mut self, name: &[u8]) -> bool {
        self.depth += 1;

        match self.depth {
            1 => {
                if name != PROJECT {
                    return false;
                }
                self.seen_project = true;
            }
            2 if name == PARENT => {
                self.in_parent = true;
                self.descriptor
                    .parent
                    .get_or_insert_with(ParentCoordinates::default);
            }
            2 => self.start_slot(Slot::project_field(name)),
            3 if self.in_parent => self.start_slot(Slot::parent_field(name)),
            _ => {}
        }
        true
    }

    fn start_slot(&mut self, slot: Option<Slot>) {
        if let Some(slot) = slot {
            self.current = Some((slot, self.depth));
            self.text.clear();
        }
    }

    fn text(&mut self, text: &str) {
        if matches!(self.current, Some((_, depth)) if depth == self.depth) {
            self.text.push_str(text);
        }
    }

    /// 요소 끝
    fn close(&mut self) {
        if let Some((slot, depth)) = self.current {
            if depth == self.depth {
                self.current = None;
                let value = self.text.trim().to_string();
                self.commit(slot, value);
            }
        }

        if self.depth == 2 && self.in_parent {
            self.in_parent = false;
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn commit(&mut self, slot: Slot, value: String) {
        let descriptor = &mut self.descriptor;
        let target = match slot {
            Slot::Name => &mut descriptor.name,
            Slot::GroupId => &mut descriptor.group_id,
            Slot::ArtifactId => &mut descriptor.artifact_id,
            Slot::Version => &mut descriptor.version,
            Slot::ParentGroupId => &mut descriptor.parent.get_or_insert_with(Default::default).group_id,
            Slot::ParentArtifactId => {
                &mut descriptor.parent.get_or_insert_with(Default::default).artifact_id
            }
            Slot::ParentVersion => &mut descriptor.parent.get_or_insert_with(Default::default).version,
        };
        *target = Some(value);
    }

    fn finish(self) -> Option<ProjectDescriptor> {
        self.seen_project.then_some(self.descriptor)
    }
}
