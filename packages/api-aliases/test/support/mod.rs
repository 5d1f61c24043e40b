// Shared fixtures for the integration tests.

#![allow(dead_code)]

use api_aliases::options::GenerateOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PARTIES_TS: &str = r#"/**
 * Generated by orval
 */
export const getPartiesApiPartiesGet = (params?: GetPartiesParams, signal?: AbortSignal) => {
  return customInstance<PartyRead[]>({ url: `/api/parties`, method: 'GET', params, signal });
};

export const getGetPartiesApiPartiesGetQueryKey = (params?: GetPartiesParams) => {
  return [`/api/parties`, ...(params ? [params] : [])] as const;
};

export type GetPartiesApiPartiesGetQueryResult = NonNullable<Awaited<ReturnType<typeof getPartiesApiPartiesGet>>>;

export function useGetPartiesApiPartiesGet<TData = PartyRead[]>(params?: GetPartiesParams) {
  return useQuery(getGetPartiesApiPartiesGetQueryOptions(params));
}

export const createPartyApiPartiesPost = (partyCreate: PartyCreate) => {
  return customInstance<PartyRead>({ url: `/api/parties`, method: 'POST', data: partyCreate });
};

export const useCreatePartyApiPartiesPost = <TError = unknown>() => {
  return useMutation(getCreatePartyApiPartiesPostMutationOptions());
};

export const usePartiesQueryKey = () => getGetPartiesApiPartiesGetQueryKey();
"#;

pub const INVENTORY_TS: &str = r#"export const getInventoryApiInventoryGet = () => customInstance<InventoryItem[]>({ url: `/api/inventory` });

export const useGetInventoryApiInventoryGet = () => useQuery({ queryKey: ['inventory'] });

export const useCustomWidget = () => null;
"#;

pub const PARTY_READ_TS: &str = "export interface PartyRead {\n  id: string;\n  name: string;\n}\n";

pub const INVENTORY_ITEM_TS: &str = "export type InventoryItem = {\n  id: string;\n};\n";

/// A repository with generated bindings under `src/api/generated` and the
/// alias module at `src/api/aliases.ts`.
pub struct Fixture {
    pub dir: TempDir,
    pub options: GenerateOptions,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let generated = dir.path().join("src/api/generated");
        write(&generated.join("parties/parties.ts"), PARTIES_TS);
        write(&generated.join("inventory/inventory.ts"), INVENTORY_TS);
        write(&generated.join("schemas/partyRead.ts"), PARTY_READ_TS);
        write(&generated.join("schemas/inventoryItem.ts"), INVENTORY_ITEM_TS);
        write(
            &generated.join("schemas/index.ts"),
            "export * from './partyRead';\nexport * from './inventoryItem';\n",
        );

        let options = GenerateOptions::new(generated, dir.path().join("src/api/aliases.ts"));
        Self { dir, options }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn generated_dir(&self) -> PathBuf {
        self.options.generated_dir.clone()
    }

    pub fn write_config(&self, json: &str) {
        write(&self.options.config, json);
    }

    pub fn write_generated(&self, relative: &str, content: &str) {
        write(&self.options.generated_dir.join(relative), content);
    }

    pub fn output(&self) -> Option<String> {
        fs::read_to_string(&self.options.output).ok()
    }
}

pub fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
