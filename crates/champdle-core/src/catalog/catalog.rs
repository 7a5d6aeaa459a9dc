//! Catalog manager for storing and querying champions.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sled::transaction::{
    ConflictableTransactionError, ConflictableTransactionResult, TransactionError,
    TransactionalTree,
};
use sled::{Db, Transactional, Tree};
use tracing::{debug, warn};

use super::SearchMode;
use crate::error::Error;
use crate::model::{Champion, ChampionSnapshot, TagKind};

/// Tree name for champion records, keyed by lower-cased name.
const CHAMPION_TREE: &str = "catalog:champions";

/// Tree name for insertion order (sequence -> champion key).
const ORDER_TREE: &str = "catalog:order";

/// Tree name for tags (kind \0 name -> tag id).
const TAG_TREE: &str = "catalog:tags";

/// Tree name for catalog metadata.
const META_TREE: &str = "catalog:meta";

/// Next champion sequence number.
const NEXT_SEQ_KEY: &[u8] = b"next_seq";

/// Next tag id.
const NEXT_TAG_ID_KEY: &[u8] = b"next_tag_id";

/// Champion record as persisted.
#[derive(Debug, Serialize, Deserialize)]
struct StoredChampion {
    /// Position in catalog order; kept across upserts.
    seq: u64,
    champion: Champion,
}

/// What a committed batch changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Champions that did not exist before.
    pub champions_created: usize,
    /// Champions that replaced an existing record with the same name.
    pub champions_updated: usize,
    /// Tags seen for the first time.
    pub tags_created: usize,
}

/// In-memory view of the persisted catalog.
#[derive(Debug, Default)]
struct Snapshot {
    /// Champions in catalog order.
    champions: Vec<Champion>,
    /// Lower-cased names, parallel to `champions`.
    keys: Vec<String>,
    /// Lower-cased name -> position.
    index: HashMap<String, usize>,
    /// Known tag names per kind.
    tags: BTreeMap<TagKind, BTreeSet<String>>,
}

impl Snapshot {
    fn get(&self, name: &str) -> Option<&Champion> {
        self.index
            .get(&Champion::key_for(name))
            .map(|&i| &self.champions[i])
    }
}

/// The champion catalog.
///
/// Records live in sled; reads are served from a snapshot that is rebuilt
/// whenever a batch commits. The catalog is the only owner of champion and
/// tag data.
pub struct Catalog {
    db: Db,
    champion_tree: Tree,
    order_tree: Tree,
    tag_tree: Tree,
    meta_tree: Tree,
    snapshot: RwLock<Snapshot>,
}

impl Catalog {
    /// Open or create a catalog using the given sled database.
    pub fn open(db: &Db) -> Result<Self, Error> {
        let catalog = Self {
            db: db.clone(),
            champion_tree: db.open_tree(CHAMPION_TREE)?,
            order_tree: db.open_tree(ORDER_TREE)?,
            tag_tree: db.open_tree(TAG_TREE)?,
            meta_tree: db.open_tree(META_TREE)?,
            snapshot: RwLock::new(Snapshot::default()),
        };

        catalog.reload()?;
        Ok(catalog)
    }

    /// Open or create a catalog stored at `path`.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let db = sled::open(path)?;
        Self::open(&db)
    }

    /// Create a catalog backed by a temporary database that is removed on drop.
    pub fn temporary() -> Result<Self, Error> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::open(&db)
    }

    /// Rebuild the in-memory snapshot from storage.
    pub fn reload(&self) -> Result<(), Error> {
        let mut snapshot = Snapshot::default();

        for entry in self.order_tree.iter() {
            let (_, key) = entry?;
            let Some(bytes) = self.champion_tree.get(&key)? else {
                warn!(key = %String::from_utf8_lossy(&key), "order entry without champion record");
                continue;
            };
            let stored: StoredChampion = serde_json::from_slice(&bytes)?;
            let lower = stored.champion.key();
            snapshot.index.insert(lower.clone(), snapshot.champions.len());
            snapshot.keys.push(lower);
            snapshot.champions.push(stored.champion);
        }

        for entry in self.tag_tree.iter() {
            let (key, _) = entry?;
            if let Some((kind, name)) = decode_tag_key(&key) {
                snapshot.tags.entry(kind).or_default().insert(name);
            }
        }

        debug!(
            champions = snapshot.champions.len(),
            tags = snapshot.tags.values().map(BTreeSet::len).sum::<usize>(),
            "catalog snapshot loaded"
        );

        *self.snapshot.write() = snapshot;
        Ok(())
    }

    /// Look up a champion by exact name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Result<Champion, Error> {
        let snapshot = self.snapshot.read();
        snapshot
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Attribute snapshot for a champion.
    pub fn attributes(&self, name: &str) -> Result<ChampionSnapshot, Error> {
        let snapshot = self.snapshot.read();
        snapshot
            .get(name)
            .map(ChampionSnapshot::from)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Names matching `query`, case-insensitively, in catalog order.
    ///
    /// A blank query returns nothing rather than every champion. Otherwise
    /// the query is matched as given, whitespace included.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<String> {
        self.search_limited(query, mode, usize::MAX)
    }

    /// Like [`Catalog::search`], returning at most `limit` names.
    pub fn search_limited(&self, query: &str, mode: SearchMode, limit: usize) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let snapshot = self.snapshot.read();
        snapshot
            .keys
            .iter()
            .zip(&snapshot.champions)
            .filter(|(key, _)| mode.matches(key, &query))
            .map(|(_, champion)| champion.name.clone())
            .take(limit)
            .collect()
    }

    /// All known tag names of a kind, sorted.
    pub fn tag_values(&self, kind: TagKind) -> Vec<String> {
        let snapshot = self.snapshot.read();
        snapshot
            .tags
            .get(&kind)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All champion names in catalog order.
    pub fn names(&self) -> Vec<String> {
        let snapshot = self.snapshot.read();
        snapshot.champions.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of champions.
    pub fn len(&self) -> usize {
        self.snapshot.read().champions.len()
    }

    /// Check if the catalog holds no champions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a batch of champions in one transaction.
    ///
    /// Tags are created on first sight. Champions are upserted by
    /// case-insensitive name and keep their original position on update.
    /// With `replace`, the existing catalog is cleared in the same
    /// transaction. Nothing is written if any step fails.
    pub fn upsert_batch(&self, champions: &[Champion], replace: bool) -> Result<BatchOutcome, Error> {
        let stale = if replace { self.all_keys()? } else { StaleKeys::default() };

        let result: Result<BatchOutcome, TransactionError<Error>> = (
            &self.champion_tree,
            &self.order_tree,
            &self.tag_tree,
            &self.meta_tree,
        )
            .transaction(|(champion_tx, order_tx, tag_tx, meta_tx)| {
                for key in &stale.champions {
                    champion_tx.remove(key.as_slice())?;
                }
                for key in &stale.order {
                    order_tx.remove(key.as_slice())?;
                }
                for key in &stale.tags {
                    tag_tx.remove(key.as_slice())?;
                }

                let mut outcome = BatchOutcome::default();
                let mut next_seq = read_counter(meta_tx, NEXT_SEQ_KEY)?;
                let mut next_tag_id = read_counter(meta_tx, NEXT_TAG_ID_KEY)?;

                for champion in champions {
                    for kind in TagKind::ALL {
                        for tag in champion.tags(kind).iter() {
                            let key = encode_tag_key(kind, tag);
                            if tag_tx.get(&key)?.is_none() {
                                tag_tx.insert(key, &next_tag_id.to_be_bytes())?;
                                next_tag_id += 1;
                                outcome.tags_created += 1;
                            }
                        }
                    }

                    let key = champion.key();
                    let seq = match champion_tx.get(key.as_bytes())? {
                        Some(bytes) => {
                            let existing: StoredChampion =
                                serde_json::from_slice(&bytes).map_err(abort)?;
                            outcome.champions_updated += 1;
                            existing.seq
                        }
                        None => {
                            let seq = next_seq;
                            next_seq += 1;
                            order_tx.insert(&seq.to_be_bytes(), key.as_bytes())?;
                            outcome.champions_created += 1;
                            seq
                        }
                    };

                    let record = StoredChampion {
                        seq,
                        champion: champion.clone(),
                    };
                    let bytes = serde_json::to_vec(&record).map_err(abort)?;
                    champion_tx.insert(key.as_bytes(), bytes)?;
                }

                meta_tx.insert(NEXT_SEQ_KEY, &next_seq.to_be_bytes())?;
                meta_tx.insert(NEXT_TAG_ID_KEY, &next_tag_id.to_be_bytes())?;
                Ok(outcome)
            });

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(TransactionError::Abort(e)) => return Err(e),
            Err(TransactionError::Storage(e)) => return Err(Error::Storage(e)),
        };

        self.reload()?;
        Ok(outcome)
    }

    /// Flush pending writes to disk.
    pub fn flush(&self) -> Result<(), Error> {
        self.db.flush()?;
        Ok(())
    }

    fn all_keys(&self) -> Result<StaleKeys, Error> {
        let collect = |tree: &Tree| -> Result<Vec<Vec<u8>>, Error> {
            tree.iter()
                .keys()
                .map(|k| k.map(|k| k.to_vec()).map_err(Error::from))
                .collect()
        };

        Ok(StaleKeys {
            champions: collect(&self.champion_tree)?,
            order: collect(&self.order_tree)?,
            tags: collect(&self.tag_tree)?,
        })
    }
}

/// Keys removed by a replacing batch.
#[derive(Default)]
struct StaleKeys {
    champions: Vec<Vec<u8>>,
    order: Vec<Vec<u8>>,
    tags: Vec<Vec<u8>>,
}

fn abort(err: serde_json::Error) -> ConflictableTransactionError<Error> {
    ConflictableTransactionError::Abort(Error::from(err))
}

fn read_counter(
    meta_tx: &TransactionalTree,
    key: &[u8],
) -> ConflictableTransactionResult<u64, Error> {
    match meta_tx.get(key)? {
        Some(bytes) if bytes.len() == 8 => {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&bytes);
            Ok(u64::from_be_bytes(buf))
        }
        Some(_) => Err(ConflictableTransactionError::Abort(Error::Transaction(
            format!("corrupt counter '{}'", String::from_utf8_lossy(key)),
        ))),
        None => Ok(0),
    }
}

fn encode_tag_key(kind: TagKind, name: &str) -> Vec<u8> {
    // Format: kind\0name
    let mut key = Vec::with_capacity(kind.as_str().len() + 1 + name.len());
    key.extend_from_slice(kind.as_str().as_bytes());
    key.push(0);
    key.extend_from_slice(name.as_bytes());
    key
}

fn decode_tag_key(key: &[u8]) -> Option<(TagKind, String)> {
    let split = key.iter().position(|&b| b == 0)?;
    let kind_str = std::str::from_utf8(&key[..split]).ok()?;
    let kind = TagKind::ALL.into_iter().find(|k| k.as_str() == kind_str)?;
    let name = std::str::from_utf8(&key[split + 1..]).ok()?;
    Some((kind, name.to_string()))
}
