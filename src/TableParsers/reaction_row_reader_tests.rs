/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::NetworkModel::annotations::Qualifier;
    use crate::NetworkModel::model::{Association, GroupKind, ObjectiveType};
    use crate::Table2Model::model_builder::ModelBuilder;
    use crate::TableParsers::equation_parser::EquationWarning;
    use crate::TableParsers::flux_bounds::{
        COBRA_0_BOUND, COBRA_DEFAULT_LB, COBRA_DEFAULT_UB, MINUS_INF, PLUS_INF,
    };
    use crate::TableParsers::identifiers::to_id;
    use crate::TableParsers::reaction_row_reader::*;
    use crate::TableParsers::row_reader::{ParsedEntity, RowReader, RowWarning};
    use crate::errors::ConversionError;
    use approx::assert_relative_eq;

    fn builder_with(metabolites: &[&str]) -> ModelBuilder {
        let mut builder = ModelBuilder::default();
        builder.build_placeholder_compartment();
        for m in metabolites {
            builder.build_species(&to_id(m, 'M'), Some(m), "d");
        }
        builder
    }

    /// mandatory ten columns followed by whatever optional ones are given
    fn row<'a>(
        id: &'a str,
        equation: &'a str,
        reversible: &'a str,
        lb: &'a str,
        ub: &'a str,
        optional: &[&'a str],
    ) -> Vec<&'a str> {
        let mut columns = vec![id, "", equation, "", "", "", "", reversible, lb, ub];
        columns.extend_from_slice(optional);
        columns
    }

    #[test]
    fn test_minimal_row() {
        let mut builder = builder_with(&["glc", "g6p", "atp", "adp"]);
        let mut reader = ReactionRowReader::new();
        let mut columns = row(
            "HEX1",
            "glc[c] + atp[c] -> g6p[c] + adp[c]",
            "false",
            "0",
            "1000",
            &[],
        );
        columns[NAME] = " hexokinase ";
        let parsed = reader.read_row(&columns, &mut builder).unwrap();
        assert_eq!(parsed, ParsedEntity::Reaction("R_HEX1".to_string()));

        let model = builder.model();
        let r = model.get_reaction("R_HEX1").unwrap();
        assert_eq!(r.name.as_deref(), Some("hexokinase"));
        assert!(!r.reversible);
        assert_eq!(r.reactants.len(), 2);
        assert_eq!(r.products.len(), 2);
        assert_eq!(r.compartment.as_deref(), Some("c"));
        assert_eq!(r.lower_flux_bound.as_deref(), Some(COBRA_0_BOUND));
        assert_eq!(r.upper_flux_bound.as_deref(), Some(COBRA_DEFAULT_UB));
        assert!(r.gene_association.is_none());
        assert!(r.annotation.is_empty());
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn test_shared_bounds_across_reactions() {
        let mut builder = builder_with(&["a", "b", "c"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(&row("R1", "a[c] <=> b[c]", "true", "-1000", "1000", &[]), &mut builder)
            .unwrap();
        reader
            .read_row(&row("R2", "b[c] <=> c[c]", "1", "-1000", "1000", &[]), &mut builder)
            .unwrap();
        reader
            .read_row(&row("R3", "c[c] -> a[c]", "false", "-INF", "INF", &[]), &mut builder)
            .unwrap();
        reader
            .read_row(&row("R4", "a[c] -> c[c]", "false", "2.5", "7", &[]), &mut builder)
            .unwrap();

        let model = builder.model();
        for id in ["R_R1", "R_R2"] {
            let r = model.get_reaction(id).unwrap();
            assert_eq!(r.lower_flux_bound.as_deref(), Some(COBRA_DEFAULT_LB));
            assert_eq!(r.upper_flux_bound.as_deref(), Some(COBRA_DEFAULT_UB));
        }
        let r3 = model.get_reaction("R_R3").unwrap();
        assert_eq!(r3.lower_flux_bound.as_deref(), Some(MINUS_INF));
        assert_eq!(r3.upper_flux_bound.as_deref(), Some(PLUS_INF));
        let r4 = model.get_reaction("R_R4").unwrap();
        assert_eq!(r4.lower_flux_bound.as_deref(), Some("R_R4_lower_bound"));
        assert_relative_eq!(model.get_parameter("R_R4_upper_bound").unwrap().value, 7.0);
        // two shared defaults, two infinities, two per-reaction bounds
        assert_eq!(model.parameters.len(), 6);
    }

    #[test]
    fn test_empty_bounds_are_skipped() {
        let mut builder = builder_with(&["a"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(&row("EX_a", "a[e] ->", "false", "", "", &[]), &mut builder)
            .unwrap();
        let r = builder.model().get_reaction("R_EX_a").unwrap();
        assert!(r.lower_flux_bound.is_none());
        assert!(r.upper_flux_bound.is_none());
        assert!(builder.model().parameters.is_empty());
    }

    #[test]
    fn test_reversibility_conflict_is_recorded() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(&row("R1", "a[c] <=> b[c]", "false", "0", "1000", &[]), &mut builder)
            .unwrap();
        let r = builder.model().get_reaction("R_R1").unwrap();
        assert!(!r.reversible);
        assert_eq!(r.reactants.len(), 1);
        assert_eq!(r.products.len(), 1);
        assert!(matches!(
            reader.warnings(),
            [RowWarning::Equation(EquationWarning::ReversibilityConflict { .. })]
        ));
    }

    #[test]
    fn test_subsystems_are_grouped() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        for (id, subsystem) in [("R1", "Glycolysis"), ("R2", "Glycolysis"), ("R3", "TCA cycle"), ("R4", "")] {
            let mut columns = row(id, "a[c] -> b[c]", "false", "0", "1000", &[]);
            columns[SUBSYSTEM] = subsystem;
            reader.read_row(&columns, &mut builder).unwrap();
        }
        let model = builder.model();
        assert_eq!(model.groups.len(), 2);
        let glycolysis = model
            .groups
            .values()
            .find(|g| g.name.as_deref() == Some("Glycolysis"))
            .unwrap();
        assert_eq!(glycolysis.kind, GroupKind::Partonomy);
        assert_eq!(glycolysis.members, vec!["R_R1".to_string(), "R_R2".to_string()]);
        assert!(model.groups.values().all(|g| !g.members.contains(&"R_R4".to_string())));
    }

    #[test]
    fn test_gene_association_and_annotation() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        let mut columns = row("R1", "a[c] -> b[c]", "false", "0", "1000", &[]);
        columns[GENE_ASSOCIATION] = "(cg0001 and cg0002) or cg0003";
        // three genes, two proteins, one gene without product
        columns[GENES] = "cg0001 cg0002 cg0003 cg9999";
        columns[PROTEINS] = "PtsG PtsH";
        reader.read_row(&columns, &mut builder).unwrap();

        let model = builder.model();
        let r = model.get_reaction("R_R1").unwrap();
        assert!(matches!(r.gene_association, Some(Association::Or(_))));
        let mut genes = r.gene_association.as_ref().unwrap().gene_products();
        genes.sort();
        assert_eq!(genes, vec!["G_cg0001", "G_cg0002", "G_cg0003"]);

        let first = model.get_gene_product("G_cg0001").unwrap();
        assert_eq!(first.name.as_deref(), Some("PtsG"));
        assert_eq!(first.meta_id.as_deref(), Some("meta_cg0001"));
        assert_eq!(
            first.annotation.resources(Qualifier::IsEncodedBy),
            vec!["https://identifiers.org/kegg.genes/cgb:cg0001"]
        );
        assert_eq!(
            model.get_gene_product("G_cg0002").unwrap().name.as_deref(),
            Some("PtsH")
        );
        // beyond the protein list: annotated, but unnamed
        let third = model.get_gene_product("G_cg0003").unwrap();
        assert!(third.name.is_none());
        assert_eq!(third.annotation.resources(Qualifier::IsEncodedBy).len(), 1);

        assert!(model.get_gene_product("G_cg9999").is_none());
        assert_eq!(
            reader.warnings(),
            &[RowWarning::UnknownGene {
                reaction: "R_R1".to_string(),
                gene: "cg9999".to_string()
            }]
        );
    }

    #[test]
    fn test_objective() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(&row("R1", "a[c] -> b[c]", "false", "0", "1000", &["0"]), &mut builder)
            .unwrap();
        assert!(builder.model().objectives.is_empty());
        reader
            .read_row(&row("BIOMASS", "b[c] ->", "false", "0", "1000", &["1"]), &mut builder)
            .unwrap();
        let model = builder.model();
        let objective = &model.objectives[OBJECTIVE_ID];
        assert_eq!(objective.objective_type, ObjectiveType::Maximize);
        assert_eq!(objective.flux_objectives.len(), 1);
        assert_eq!(objective.flux_objectives[0].reaction, "R_BIOMASS");
        assert_relative_eq!(objective.flux_objectives[0].coefficient, 1.0);
        assert_eq!(model.active_objective.as_deref(), Some(OBJECTIVE_ID));
    }

    #[test]
    fn test_confidence_and_ec_number() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(
                &row("R1", "a[c] -> b[c]", "false", "0", "1000", &["", "2", "2.7.1.1"]),
                &mut builder,
            )
            .unwrap();
        reader
            .read_row(&row("R2", "a[c] -> b[c]", "false", "0", "1000", &["", "7"]), &mut builder)
            .unwrap();
        let model = builder.model();
        let r1 = model.get_reaction("R_R1").unwrap();
        assert_eq!(r1.meta_id.as_deref(), Some("meta_R_R1"));
        assert_eq!(
            r1.annotation.resources(Qualifier::Is),
            vec![
                "https://identifiers.org/eco/ECO:0000044",
                "https://identifiers.org/ec-code/2.7.1.1"
            ]
        );
        assert_eq!(r1.annotation.cv_terms.len(), 2);
        // out of range scores add nothing
        assert!(model.get_reaction("R_R2").unwrap().annotation.is_empty());
    }

    #[test]
    fn test_eco_table() {
        let uris: Vec<String> = (0..5).filter_map(eco_term).map(eco_uri).collect();
        assert_eq!(
            uris,
            vec![
                "https://identifiers.org/eco/ECO:0000001",
                "https://identifiers.org/eco/ECO:0005551",
                "https://identifiers.org/eco/ECO:0000044",
                "https://identifiers.org/eco/ECO:0000073",
                "https://identifiers.org/eco/ECO:0000002",
            ]
        );
        assert_eq!(eco_term(-1), None);
        assert_eq!(eco_term(5), None);
    }

    #[test]
    fn test_notes() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(
                &row(
                    "R1",
                    "a[c] -> b[c]",
                    "false",
                    "0",
                    "1000",
                    &["", "", "", "<p>curated</p>", "<p>broken"],
                ),
                &mut builder,
            )
            .unwrap();
        let r = builder.model().get_reaction("R_R1").unwrap();
        assert_eq!(r.notes, vec!["<p>curated</p>".to_string()]);
        assert!(matches!(
            reader.warnings(),
            [RowWarning::MalformedNotes { .. }]
        ));
    }

    #[test]
    fn test_fatal_errors() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        let short = ["R1", "name", "a[c] -> b[c]"];
        assert!(matches!(
            reader.read_row(&short, &mut builder),
            Err(ConversionError::MissingColumns { expected: 10, found: 3 })
        ));
        assert!(matches!(
            reader.read_row(&row("R2", "a[c] -> b[c]", "false", "zero", "1000", &[]), &mut builder),
            Err(ConversionError::InvalidNumber { .. })
        ));
        assert!(matches!(
            reader.read_row(&row("R3", "a[c] -> b[c]", "false", "0", "1000", &["", "high"]), &mut builder),
            Err(ConversionError::InvalidInteger { column: "confidence score", .. })
        ));
        let mut bad_gpr = row("R4", "a[c] -> b[c]", "false", "0", "1000", &[]);
        bad_gpr[GENE_ASSOCIATION] = "(cg0001 or";
        assert!(matches!(
            reader.read_row(&bad_gpr, &mut builder),
            Err(ConversionError::GprSyntax { .. })
        ));
    }

    #[test]
    fn test_duplicate_reaction_keeps_first() {
        let mut builder = builder_with(&["a", "b"]);
        let mut reader = ReactionRowReader::new();
        reader
            .read_row(&row("R1", "a[c] -> b[c]", "false", "0", "1000", &[]), &mut builder)
            .unwrap();
        reader
            .read_row(&row("R1", "b[c] -> a[c]", "false", "0", "5", &[]), &mut builder)
            .unwrap();
        let r = builder.model().get_reaction("R_R1").unwrap();
        assert_eq!(r.reactants[0].species, "M_a_c");
        assert_eq!(r.upper_flux_bound.as_deref(), Some(COBRA_DEFAULT_UB));
        assert_eq!(
            reader.warnings(),
            &[RowWarning::DuplicateId { id: "R_R1".to_string() }]
        );
    }
}
